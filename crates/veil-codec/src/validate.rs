//! 加密后校验.
//!
//! H.264/H.265 的打包器按起始码切分帧. 密文近似随机, 可能恰好出现
//! `00 00 01`, 接收端据此切出的帧会错位并解密失败.
//! 校验失败不是故障: 调用方应换用新的 nonce/密钥流重新加密后再次校验.

use log::debug;

use crate::parsers::annex_b::{SHORT_START_CODE_SIZE, contains_start_code};
use crate::sink::FrameSink;

/// 加密片段两侧额外检查的字节数, 用于捕获跨越明文/密文边界的起始码
const BOUNDARY_PADDING: usize = SHORT_START_CODE_SIZE - 1;

/// 校验加密后的输出帧是否可以安全发送
///
/// `frame` 为按接收器记录的明文区间与密文拼装后的最终帧.
/// 非 Annex B 编解码器总是通过.
pub fn validate_encrypted_frame(sink: &dyn FrameSink, frame: &[u8]) -> bool {
    let codec = sink.codec();
    if !codec.uses_annex_b() {
        return true;
    }

    let mut encrypted_start = 0usize;
    for range in sink.unencrypted_ranges() {
        if encrypted_start == range.offset {
            encrypted_start += range.size;
            continue;
        }

        let start = encrypted_start - encrypted_start.min(BOUNDARY_PADDING);
        let end = (range.offset + BOUNDARY_PADDING).min(frame.len());
        if start < end && contains_start_code(&frame[start..end]) {
            debug!("{codec}: 密文中出现起始码, 区间=[{encrypted_start}, {})", range.offset);
            return false;
        }

        encrypted_start = range.end();
    }

    if encrypted_start >= frame.len() {
        return true;
    }

    let start = encrypted_start - encrypted_start.min(BOUNDARY_PADDING);
    if contains_start_code(&frame[start..]) {
        debug!("{codec}: 尾部密文中出现起始码, offset={encrypted_start}");
        return false;
    }

    true
}
