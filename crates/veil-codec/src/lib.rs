//! # veil-codec
//!
//! 端到端媒体加密的帧级切分库.
//!
//! 整帧加密会破坏网络打包器: 它需要读取 NAL 类型、OBU 头部、VP8 负载头等明文字段.
//! 本 crate 把一帧编码数据拆成有序的 "明文" / "加密" 片段,
//! 加密引擎只替换加密片段且保持长度不变, 打包器的解析逻辑因此不受影响.
//!
//! ## 使用示例
//!
//! ```rust
//! use veil_codec::{CodecId, FrameSink, OutboundFrameProcessor, validate_encrypted_frame};
//!
//! let frame = [0x00, 0x00, 0x00, 0x01, 0x26, 0x01, 0xAF, 0x10, 0x22];
//! let mut processor = OutboundFrameProcessor::new();
//! processor.process_frame(&frame, CodecId::H265).unwrap();
//!
//! // 起始码 + 2 字节 NAL 头保持明文, 其余交给加密引擎
//! assert_eq!(processor.unencrypted_ranges()[0].size, 6);
//! assert_eq!(processor.encrypted_bytes(), &[0xAF, 0x10, 0x22]);
//!
//! // 加密后用最终帧校验, 失败时应换 nonce 重新加密
//! assert!(validate_encrypted_frame(&processor, &frame));
//! ```

pub mod codec_id;
pub mod parsers;
pub mod processor;
pub mod ranges;
pub mod sink;
pub mod splitters;
pub mod validate;

// 重导出常用类型
pub use codec_id::CodecId;
pub use processor::OutboundFrameProcessor;
pub use ranges::{
    deserialize_unencrypted_ranges, serialize_unencrypted_ranges, validate_unencrypted_ranges,
};
pub use sink::{FrameSink, UnencryptedRange};
pub use splitters::split_frame;
pub use validate::validate_encrypted_frame;
