//! VP8 帧切分.

use veil_core::{VeilError, VeilResult};

use crate::parsers::vp8::unencrypted_header_size;
use crate::sink::FrameSink;

/// VP8: 关键帧保留 10 字节负载头明文, 差分帧保留首字节
pub fn process_frame_vp8(sink: &mut dyn FrameSink, frame: &[u8]) -> VeilResult<()> {
    let Some(&first_byte) = frame.first() else {
        return Err(VeilError::InvalidArgument("vp8: 帧数据为空".into()));
    };

    let header_size = unencrypted_header_size(first_byte);
    if frame.len() < header_size {
        return Err(VeilError::Length(format!(
            "vp8: 帧长度不足以容纳负载头, size={}, required={header_size}",
            frame.len()
        )));
    }

    let (header, payload) = frame.split_at(header_size);
    sink.add_unencrypted_bytes(header);
    sink.add_encrypted_bytes(payload);
    Ok(())
}
