//! 按编解码器切分帧.
//!
//! 每个切分器把一帧拆成有序的 "明文" / "加密" 片段并依次交给 [`FrameSink`].
//! 片段在输出帧中连续且不重叠; 加密后密文与明文等长替换,
//! 网络打包器仍能读到它需要的头部字段.
//!
//! | 编解码器 | 明文部分 |
//! |----------|----------|
//! | Opus | 无 |
//! | VP9 | 无 |
//! | VP8 | 关键帧前 10 字节, 差分帧首字节 |
//! | H.264 | 起始码 + NAL 头 + 切片头前三个 ue(v); 非切片 NAL 整体明文 |
//! | H.265 | 起始码 + 2 字节 NAL 头; 非 VCL NAL 整体明文 |
//! | AV1 | OBU 头 + 扩展 + 规范化长度; 丢弃 TD/TileList/Padding |

pub mod av1;
pub mod h264;
pub mod h265;
pub mod vp8;

use log::trace;
use veil_core::{VeilError, VeilResult};

use crate::codec_id::CodecId;
use crate::sink::FrameSink;

pub use av1::process_frame_av1;
pub use h264::process_frame_h264;
pub use h265::process_frame_h265;
pub use vp8::process_frame_vp8;

/// 按接收器绑定的编解码器切分一帧
pub fn split_frame(sink: &mut dyn FrameSink, frame: &[u8]) -> VeilResult<()> {
    let codec = sink.codec();
    if frame.is_empty() {
        return Err(VeilError::InvalidArgument(format!("{codec}: 帧数据为空")));
    }

    trace!("{codec}: 开始切分, size={}", frame.len());
    match codec {
        CodecId::Opus => process_frame_opus(sink, frame),
        CodecId::Vp8 => process_frame_vp8(sink, frame),
        CodecId::Vp9 => process_frame_vp9(sink, frame),
        CodecId::H264 => process_frame_h264(sink, frame),
        CodecId::H265 => process_frame_h265(sink, frame),
        CodecId::Av1 => process_frame_av1(sink, frame),
        CodecId::None => Err(VeilError::InvalidArgument(
            "不支持的编解码器: none".into(),
        )),
    }
}

/// Opus: 整帧加密, 解包器不读取任何负载字段
pub fn process_frame_opus(sink: &mut dyn FrameSink, frame: &[u8]) -> VeilResult<()> {
    sink.add_encrypted_bytes(frame);
    Ok(())
}

/// VP9: 整帧加密, 解包所需信息都在每个包的负载描述符中
pub fn process_frame_vp9(sink: &mut dyn FrameSink, frame: &[u8]) -> VeilResult<()> {
    sink.add_encrypted_bytes(frame);
    Ok(())
}
