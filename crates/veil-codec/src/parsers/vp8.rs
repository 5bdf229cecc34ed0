//! VP8 负载头部解析.
//!
//! 参见 RFC 7741 4.3:
//! ```text
//!  0 1 2 3 4 5 6 7
//! +-+-+-+-+-+-+-+-+
//! |Size0|H| VER |P|
//! +-+-+-+-+-+-+-+-+
//! ```
//! P 为反向关键帧标志: 0 表示关键帧.

/// 关键帧需要保持明文的字节数 (解包器会读取 10 字节负载头)
pub const KEY_FRAME_UNENCRYPTED_BYTES: usize = 10;

/// 差分帧需要保持明文的字节数 (只需关键帧标志所在字节)
pub const DELTA_FRAME_UNENCRYPTED_BYTES: usize = 1;

/// 判断首字节是否标记关键帧
pub fn is_key_frame(first_byte: u8) -> bool {
    first_byte & 0x01 == 0
}

/// 根据首字节计算需要保持明文的字节数
pub fn unencrypted_header_size(first_byte: u8) -> usize {
    if is_key_frame(first_byte) {
        KEY_FRAME_UNENCRYPTED_BYTES
    } else {
        DELTA_FRAME_UNENCRYPTED_BYTES
    }
}
