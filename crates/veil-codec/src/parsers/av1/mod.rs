//! AV1 低开销码流 (Low Overhead Bitstream Format) 解析.
//!
//! 帧由连续的 OBU 组成, 每个 OBU: 头部 (1 字节) + 可选扩展 (1 字节)
//! + 可选 LEB128 长度 + 负载. 未携带长度的 OBU 延伸到帧尾.

pub mod obu;

pub use obu::{OBU_EXTENSION_SIZE, OBU_HAS_SIZE_MASK, ObuHeader, ObuType};
