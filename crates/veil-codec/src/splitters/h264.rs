//! H.264 帧切分.
//!
//! 帧可能被打包为 STAP-A 或 FU-A, 解包器需要每个 NAL 的类型,
//! 对切片还需要 PPS id. 其余部分尽量加密.

use log::{trace, warn};
use veil_core::{VeilError, VeilResult};

use crate::parsers::annex_b::{LONG_START_CODE, SHORT_START_CODE_SIZE, iter_nalus};
use crate::parsers::h264::{NAL_HEADER_SIZE, NalUnitType, bytes_covering_pps};
use crate::sink::FrameSink;

/// 切分一帧 H.264 Annex B 数据
///
/// 每个 NAL 输出为: 4 字节起始码 (明文) + NAL 内容.
/// 接收端 WebRTC 会把起始码统一转成 4 字节, 因此这里直接写长起始码.
/// 切片/IDR 只保留头部与前三个 ue(v) 值的字节, 其它 NAL 整体明文.
/// 第一个起始码之前的字节不会输出.
pub fn process_frame_h264(sink: &mut dyn FrameSink, frame: &[u8]) -> VeilResult<()> {
    if frame.len() < SHORT_START_CODE_SIZE + NAL_HEADER_SIZE {
        return Err(VeilError::Length(format!(
            "H.264: 帧太短, 无法容纳 NAL 单元, size={}",
            frame.len()
        )));
    }

    let mut nalu_count = 0usize;
    for nalu in iter_nalus(frame) {
        let nal_type = NalUnitType::from_header(frame[nalu.start]);
        sink.add_unencrypted_bytes(&LONG_START_CODE);

        if nal_type.has_encryptable_payload() {
            let payload_start = nalu.start + NAL_HEADER_SIZE;
            let pps_bytes = bytes_covering_pps(&frame[payload_start..nalu.end])?;
            // 负载耗尽时扫描结果可能越过 NAL 末尾
            let header_end = (payload_start + pps_bytes).min(nalu.end);

            trace!(
                "H.264: NAL {nal_type} offset={}, size={}, 明文头部={}",
                nalu.start,
                nalu.len(),
                header_end - nalu.start
            );
            sink.add_unencrypted_bytes(&frame[nalu.start..header_end]);
            sink.add_encrypted_bytes(&frame[header_end..nalu.end]);
        } else {
            trace!(
                "H.264: NAL {nal_type} offset={}, size={}, 整体明文",
                nalu.start,
                nalu.len()
            );
            sink.add_unencrypted_bytes(&frame[nalu.clone()]);
        }
        nalu_count += 1;
    }

    if nalu_count == 0 {
        warn!("H.264: 帧中未找到起始码, size={}", frame.len());
    }
    Ok(())
}
