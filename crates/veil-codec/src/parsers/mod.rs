//! 码流解析器.
//!
//! 只解析切分所需的头部字段, 不做任何解码:
//! - Annex B 起始码扫描 (H.264/H.265 共用)
//! - H.264 NAL 类型与切片头指数哥伦布扫描
//! - H.265 NAL 头部
//! - AV1 OBU 头部
//! - VP8 负载头部

pub mod annex_b;
pub mod av1;
pub mod h264;
pub mod h265;
pub mod vp8;
