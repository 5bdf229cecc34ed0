//! 明文区间表的序列化.
//!
//! 接收端需要知道哪些字节是明文才能原样拼回密文, 区间表以
//! `offset, size` 交替的 LEB128 序列附加在加密帧的补充数据中.

use veil_core::leb128::{LEB128_MAX_SIZE, leb128_size, read_leb128, write_leb128};
use veil_core::{VeilError, VeilResult};

use crate::sink::UnencryptedRange;

/// 计算序列化后的字节数
pub fn unencrypted_ranges_size(ranges: &[UnencryptedRange]) -> usize {
    ranges
        .iter()
        .map(|r| leb128_size(r.offset as u64) + leb128_size(r.size as u64))
        .sum()
}

/// 序列化明文区间表
pub fn serialize_unencrypted_ranges(ranges: &[UnencryptedRange]) -> Vec<u8> {
    let mut out = Vec::with_capacity(unencrypted_ranges_size(ranges));
    let mut buf = [0u8; LEB128_MAX_SIZE];

    for range in ranges {
        let written = write_leb128(range.offset as u64, &mut buf);
        out.extend_from_slice(&buf[..written]);
        let written = write_leb128(range.size as u64, &mut buf);
        out.extend_from_slice(&buf[..written]);
    }

    out
}

/// 反序列化明文区间表
///
/// 数据必须恰好由完整的 `offset, size` 对组成.
pub fn deserialize_unencrypted_ranges(data: &[u8]) -> VeilResult<Vec<UnencryptedRange>> {
    let mut ranges = Vec::new();
    let mut pos = 0usize;

    while pos < data.len() {
        let offset = read_range_field(data, &mut pos, "offset")?;
        if pos >= data.len() {
            return Err(VeilError::InvalidData(format!(
                "明文区间表截断: 缺少 size 字段, offset={offset}"
            )));
        }
        let size = read_range_field(data, &mut pos, "size")?;
        ranges.push(UnencryptedRange::new(offset, size));
    }

    Ok(ranges)
}

fn read_range_field(data: &[u8], pos: &mut usize, field: &str) -> VeilResult<usize> {
    let (value, consumed) = read_leb128(&data[*pos..]).ok_or_else(|| {
        VeilError::InvalidData(format!("明文区间表 {field} 字段非法, pos={}", *pos))
    })?;
    *pos += consumed;
    usize::try_from(value)
        .map_err(|_| VeilError::InvalidData(format!("明文区间表 {field} 溢出, value={value}")))
}

/// 校验区间表是否适用于给定大小的帧
///
/// 区间必须按偏移升序、互不重叠且不越过帧尾.
pub fn validate_unencrypted_ranges(ranges: &[UnencryptedRange], frame_size: usize) -> bool {
    let mut previous_end = 0usize;
    for (i, range) in ranges.iter().enumerate() {
        if i > 0 && range.offset < previous_end {
            return false;
        }
        let Some(end) = range.offset.checked_add(range.size) else {
            return false;
        };
        if end > frame_size {
            return false;
        }
        previous_end = end;
    }
    true
}
