//! # Veil
//!
//! 端到端媒体加密的帧级切分框架.
//!
//! 加密引擎只替换帧中的 "加密" 片段, 打包器需要的编解码器头部保持明文:
//! - **切分**: Opus, VP8, VP9, H.264, H.265, AV1
//! - **校验**: 加密后检查 Annex B 帧中是否出现伪起始码
//! - **区间表**: 明文区间的 LEB128 序列化与校验
//!
//! # 快速开始
//!
//! ```rust
//! use veil::codec::{CodecId, OutboundFrameProcessor};
//!
//! let mut processor = OutboundFrameProcessor::new();
//! processor.process_frame(&[0x11, 0xAA, 0xBB], CodecId::Vp8).unwrap();
//! assert_eq!(processor.encrypted_bytes(), &[0xAA, 0xBB]);
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `veil-core` | 错误类型, 位读取器, LEB128 |
//! | `veil-codec` | 码流解析, 帧切分, 加密后校验 |

/// 核心类型与工具
pub use veil_core as core;

/// 帧切分与校验
pub use veil_codec as codec;

pub mod logging;

/// 获取 Veil 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
