//! # veil-core
//!
//! Veil 核心库, 提供错误类型、比特流读取与 LEB128 变长整数等底层工具.
//!
//! 帧切分 (`veil-codec`) 中所有按位/按字节的解析都建立在本 crate 之上.

pub mod bitreader;
pub mod error;
pub mod leb128;
pub mod media_type;

// 重导出常用类型
pub use error::{VeilError, VeilResult};
pub use media_type::MediaType;
