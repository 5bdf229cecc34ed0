//! LEB128 无符号变长整数编解码.
//!
//! AV1 的 `obu_size` 字段以及序列化后的明文区间表均使用 LEB128:
//! 每字节低 7 位承载数据 (低位组在前), 最高位为续位标志.

/// 64 位值编码后的最大字节数
pub const LEB128_MAX_SIZE: usize = 10;

/// 计算 `value` 的规范 LEB128 编码长度
pub fn leb128_size(mut value: u64) -> usize {
    let mut size = 0;
    while value >= 0x80 {
        size += 1;
        value >>= 7;
    }
    size + 1
}

/// 从 `buf` 头部读取一个 LEB128 值
///
/// 返回 `(值, 消耗字节数)`. 数据截断或超过 64 位时返回 `None`.
/// 允许非规范编码 (如带 `0x80 0x00` 填充的长度字段), 调用方需要规范化时自行重写.
pub fn read_leb128(buf: &[u8]) -> Option<(u64, usize)> {
    let mut value = 0u64;
    let mut fill_bits = 0u32;
    let mut pos = 0usize;

    while pos < buf.len() && fill_bits < 64 - 7 {
        let byte = buf[pos];
        value |= u64::from(byte & 0x7F) << fill_bits;
        pos += 1;
        fill_bits += 7;
        if byte & 0x80 == 0 {
            return Some((value, pos));
        }
    }

    // 已读 9 字节仍未结束, 第 10 字节只剩 1 个有效位
    if pos < buf.len() && buf[pos] <= 1 {
        value |= u64::from(buf[pos]) << fill_bits;
        return Some((value, pos + 1));
    }

    None
}

/// 将 `value` 以规范 LEB128 写入 `buf`, 返回写入的字节数
pub fn write_leb128(mut value: u64, buf: &mut [u8; LEB128_MAX_SIZE]) -> usize {
    let mut size = 0;
    while value >= 0x80 {
        buf[size] = 0x80 | (value & 0x7F) as u8;
        size += 1;
        value >>= 7;
    }
    buf[size] = value as u8;
    size + 1
}
