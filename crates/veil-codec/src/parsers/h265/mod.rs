//! H.265/HEVC 码流解析.
//!
//! # HEVC NAL 头部 (2 字节)
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ forbidden(1) | type(6) | layer_id(6) | tid(3) │
//! └──────────────────────────────────────────────┘
//! ```

pub mod nal;

pub use nal::{HevcNalHeader, NAL_HEADER_SIZE, VCL_CUTOFF};
