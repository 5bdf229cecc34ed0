//! H.264/H.265 Annex B 起始码扫描.
//!
//! Annex B 使用起始码分隔 NAL 单元:
//! - 3 字节起始码: `00 00 01`
//! - 4 字节起始码: `00 00 00 01`
//!
//! 加密后的校验也复用此扫描器, 检查密文中是否意外出现起始码.

use std::ops::Range;

/// 短起始码长度
pub const SHORT_START_CODE_SIZE: usize = 3;

/// 长起始码 (接收端 WebRTC 会把所有起始码规范化为 4 字节)
pub const LONG_START_CODE: [u8; 4] = [0x00, 0x00, 0x00, 0x01];

/// 起始码中允许出现的最大字节值
const START_CODE_HIGHEST_POSSIBLE_VALUE: u8 = 1;
/// 起始码结束字节
const START_CODE_END_BYTE: u8 = 1;
/// 起始码前导字节
const START_CODE_LEADING_BYTE: u8 = 0;

/// 一次起始码匹配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaluIndex {
    /// 起始码之后第一个字节的位置 (即 NAL 头部位置)
    pub start_index: usize,
    /// 匹配到的起始码长度 (3 或 4)
    pub start_code_size: usize,
}

impl NaluIndex {
    /// 起始码本身的起始位置
    pub fn start_code_offset(&self) -> usize {
        self.start_index - self.start_code_size
    }
}

/// 从 `search_start` 开始查找下一个起始码
///
/// 3 字节匹配之前若还有一个 0x00, 视为 4 字节起始码.
/// 最后一个三字节窗口不参与匹配, 因此末尾没有后续数据的起始码不会被报告.
pub fn find_next_nalu_index(buffer: &[u8], search_start: usize) -> Option<NaluIndex> {
    if buffer.len() < SHORT_START_CODE_SIZE {
        return None;
    }

    let last = buffer.len() - SHORT_START_CODE_SIZE;
    let mut i = search_start;
    while i < last {
        let third = buffer[i + 2];
        if third > START_CODE_HIGHEST_POSSIBLE_VALUE {
            // 第三字节不是 0 或 1, 当前窗口内不可能存在起始码
            i += SHORT_START_CODE_SIZE;
        } else if third == START_CODE_END_BYTE {
            if buffer[i + 1] == START_CODE_LEADING_BYTE && buffer[i] == START_CODE_LEADING_BYTE {
                let start_index = i + SHORT_START_CODE_SIZE;
                let start_code_size = if i >= 1 && buffer[i - 1] == START_CODE_LEADING_BYTE {
                    4
                } else {
                    3
                };
                return Some(NaluIndex {
                    start_index,
                    start_code_size,
                });
            }
            i += SHORT_START_CODE_SIZE;
        } else {
            // 第三字节为 0, 可能是后续起始码的前缀
            i += 1;
        }
    }

    None
}

/// 缓冲区中是否存在任意起始码
pub fn contains_start_code(buffer: &[u8]) -> bool {
    find_next_nalu_index(buffer, 0).is_some()
}

/// Annex B NAL 单元迭代器
///
/// 依次产出每个 NAL 单元 (不含起始码) 在缓冲区中的范围, 单元结束于下一个起始码之前或缓冲区末尾.
/// 位于缓冲区最后一个字节的 NAL 头不会被产出.
#[derive(Debug, Clone)]
pub struct NaluIter<'a> {
    buffer: &'a [u8],
    next: Option<NaluIndex>,
}

/// 遍历缓冲区中的 NAL 单元
pub fn iter_nalus(buffer: &[u8]) -> NaluIter<'_> {
    NaluIter {
        buffer,
        next: find_next_nalu_index(buffer, 0),
    }
}

impl Iterator for NaluIter<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next.take()?;
        if index.start_index >= self.buffer.len().saturating_sub(1) {
            return None;
        }

        let following = find_next_nalu_index(self.buffer, index.start_index);
        let end = following.map_or(self.buffer.len(), |n| n.start_code_offset());
        self.next = following;
        Some(index.start_index..end)
    }
}
