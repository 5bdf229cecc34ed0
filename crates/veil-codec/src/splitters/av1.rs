//! AV1 帧切分.
//!
//! OBU 头部、扩展字节与长度字段保持明文, 负载加密.
//! 时间分隔符、Tile 列表与填充 OBU 会被打包器丢弃, 这里直接不输出.

use log::trace;
use veil_core::leb128::{LEB128_MAX_SIZE, read_leb128, write_leb128};
use veil_core::{VeilError, VeilResult};

use crate::parsers::av1::{OBU_EXTENSION_SIZE, ObuHeader};
use crate::sink::FrameSink;

/// 切分一帧 AV1 低开销码流
///
/// 长度字段以规范 LEB128 重新写出: 部分硬件编码器会输出带 0 填充的长度,
/// 打包器去掉填充后帧会整体偏移, 导致接收端解密对不齐.
/// 最后一个 OBU 若携带长度, 则清除 "携带长度" 标志并省略长度字段.
pub fn process_frame_av1(sink: &mut dyn FrameSink, frame: &[u8]) -> VeilResult<()> {
    let mut i = 0usize;
    while i < frame.len() {
        let header_index = i;
        let header = ObuHeader::parse(frame[header_index])?;
        i += 1;

        if header.has_extension {
            i += OBU_EXTENSION_SIZE;
        }

        if i >= frame.len() {
            return Err(VeilError::InvalidData(format!(
                "AV1: OBU 头部越过帧尾, offset={header_index}, size={}",
                frame.len()
            )));
        }

        let payload_size = if header.has_size {
            let (size, consumed) = read_leb128(&frame[i..]).ok_or_else(|| {
                VeilError::InvalidData(format!("AV1: 非法的 LEB128 长度, offset={i}"))
            })?;
            i += consumed;
            usize::try_from(size).map_err(|_| {
                VeilError::InvalidData(format!("AV1: OBU 长度溢出, size={size}"))
            })?
        } else {
            // 未携带长度的 OBU 延伸到帧尾
            frame.len() - i
        };

        let payload_index = i;
        if payload_size > frame.len() - payload_index {
            return Err(VeilError::InvalidData(format!(
                "AV1: OBU 负载越过帧尾, offset={payload_index}, payload={payload_size}, size={}",
                frame.len()
            )));
        }
        i += payload_size;

        if header.obu_type.dropped_by_packetizer() {
            trace!(
                "AV1: 丢弃 OBU {:?}, offset={header_index}, size={}",
                header.obu_type,
                i - header_index
            );
            continue;
        }

        let rewritten_without_size = header.has_size && i == frame.len();
        let header_byte = if rewritten_without_size {
            header.without_size_flag()
        } else {
            header.raw
        };

        sink.add_unencrypted_bytes(&[header_byte]);
        if header.has_extension {
            let extension_index = header_index + 1;
            sink.add_unencrypted_bytes(&frame[extension_index..extension_index + OBU_EXTENSION_SIZE]);
        }

        if header.has_size && !rewritten_without_size {
            let mut leb128_buffer = [0u8; LEB128_MAX_SIZE];
            let written = write_leb128(payload_size as u64, &mut leb128_buffer);
            sink.add_unencrypted_bytes(&leb128_buffer[..written]);
        }

        trace!(
            "AV1: OBU {:?} offset={header_index}, payload={payload_size}, strip_size={rewritten_without_size}",
            header.obu_type
        );
        sink.add_encrypted_bytes(&frame[payload_index..i]);
    }

    Ok(())
}
