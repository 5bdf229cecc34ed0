//! H.264/AVC 码流解析.
//!
//! 切分只需要两类信息:
//! - NAL 头部中的类型字段
//! - 切片头前三个指数哥伦布值 (first_mb_in_slice, slice_type, pps_id) 所跨越的字节数

pub mod golomb;
pub mod nal;

pub use golomb::bytes_covering_pps;
pub use nal::{NAL_HEADER_SIZE, NalUnitType};
