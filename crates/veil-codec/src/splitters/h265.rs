//! H.265/HEVC 帧切分.

use log::{trace, warn};
use veil_core::{VeilError, VeilResult};

use crate::parsers::annex_b::{LONG_START_CODE, SHORT_START_CODE_SIZE, iter_nalus};
use crate::parsers::h265::{HevcNalHeader, NAL_HEADER_SIZE};
use crate::sink::FrameSink;

/// 切分一帧 H.265 Annex B 数据
///
/// VCL NAL (类型 < 32) 只保留 2 字节 NAL 头明文, 负载加密;
/// 参数集、SEI 等非 VCL NAL 整体明文. 起始码统一写为 4 字节.
pub fn process_frame_h265(sink: &mut dyn FrameSink, frame: &[u8]) -> VeilResult<()> {
    if frame.len() < SHORT_START_CODE_SIZE + NAL_HEADER_SIZE {
        return Err(VeilError::Length(format!(
            "HEVC: 帧太短, 无法容纳 NAL 单元, size={}",
            frame.len()
        )));
    }

    let mut nalu_count = 0usize;
    for nalu in iter_nalus(frame) {
        let header = HevcNalHeader::parse(&frame[nalu.start..])?;
        sink.add_unencrypted_bytes(&LONG_START_CODE);

        if header.is_vcl() {
            let header_end = (nalu.start + NAL_HEADER_SIZE).min(nalu.end);
            trace!(
                "HEVC: VCL NAL type={} offset={}, size={}",
                header.nal_type,
                nalu.start,
                nalu.len()
            );
            sink.add_unencrypted_bytes(&frame[nalu.start..header_end]);
            sink.add_encrypted_bytes(&frame[header_end..nalu.end]);
        } else {
            trace!(
                "HEVC: 非 VCL NAL type={} offset={}, size={}, 整体明文",
                header.nal_type,
                nalu.start,
                nalu.len()
            );
            sink.add_unencrypted_bytes(&frame[nalu.clone()]);
        }
        nalu_count += 1;
    }

    if nalu_count == 0 {
        warn!("HEVC: 帧中未找到起始码, size={}", frame.len());
    }
    Ok(())
}
