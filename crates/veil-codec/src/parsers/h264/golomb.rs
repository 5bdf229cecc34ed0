//! 切片头指数哥伦布值扫描.
//!
//! H.264 切片头以三个 ue(v) 值开头: first_mb_in_slice, slice_type, pic_parameter_set_id.
//! 解包器需要读到 pps_id, 因此这三个值所在的字节必须保持明文.
//!
//! 负载是带防竞争字节的 RBSP: 每逢字节边界遇到 `00 00 03` 中的 0x03, 整个字节跳过不计.

use veil_core::{VeilError, VeilResult};

/// 防竞争字节
const EMULATION_PREVENTION_BYTE: u8 = 0x03;

/// 需要覆盖的指数哥伦布值个数
const EXP_GOLOMB_VALUES_TO_COVER: u32 = 3;

/// 前导零位数上限, 达到即视为损坏或恶意码流
const MAX_LEADING_ZERO_BITS: u32 = 32;

/// 计算覆盖前三个指数哥伦布值所需的明文字节数
///
/// `payload` 为 NAL 头部之后的数据. 按位 (MSB first) 扫描:
/// 统计前导零, 遇到 1 后按零的个数跳过值的剩余位.
/// 返回值为 `最终位索引 / 8 + 1`, 在负载耗尽时可能超过 `payload.len()`,
/// 由调用方截断到 NAL 边界.
pub fn bytes_covering_pps(payload: &[u8]) -> VeilResult<usize> {
    let total_bits = payload.len() as u64 * 8;
    let mut bit_index = 0u64;
    let mut zero_bits = 0u32;
    let mut parsed_values = 0u32;

    while bit_index < total_bits && parsed_values < EXP_GOLOMB_VALUES_TO_COVER {
        let bit_offset = (bit_index % 8) as u32;
        let byte_index = (bit_index / 8) as usize;
        let byte = payload[byte_index];

        if bit_offset == 0
            && byte_index >= 2
            && byte == EMULATION_PREVENTION_BYTE
            && payload[byte_index - 1] == 0
            && payload[byte_index - 2] == 0
        {
            bit_index += 8;
            continue;
        }

        if byte & (1 << (7 - bit_offset)) == 0 {
            zero_bits += 1;
            bit_index += 1;

            if zero_bits >= MAX_LEADING_ZERO_BITS {
                return Err(VeilError::Length(format!(
                    "H.264: 指数哥伦布值过大, 前导零位数={zero_bits}, bit={bit_index}"
                )));
            }
        } else {
            parsed_values += 1;
            bit_index += 1 + u64::from(zero_bits);
            zero_bits = 0;
        }
    }

    Ok((bit_index / 8) as usize + 1)
}
