//! 帧区间接收器 trait 定义.
//!
//! 切分器不直接产出密文, 而是按顺序向接收器声明 "保持明文" 与
//! "需要加密" 的字节片段. 接收器负责拼装输出帧并记录明文区间,
//! 之后交给外部加密引擎与加密后校验使用.

use crate::codec_id::CodecId;

/// 输出帧中的一段明文区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnencryptedRange {
    /// 在输出帧中的起始偏移
    pub offset: usize,
    /// 字节数
    pub size: usize,
}

impl UnencryptedRange {
    /// 创建明文区间
    pub const fn new(offset: usize, size: usize) -> Self {
        Self { offset, size }
    }

    /// 区间结束偏移 (不含)
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// 帧区间接收器 trait
///
/// 声明按调用顺序拼接成输出帧: 每次调用都紧接在上一次之后,
/// 因此片段天然连续、不重叠. 声明的字节可以来自输入帧,
/// 也可以是切分器改写后的数据 (如规范化的 4 字节起始码、重新编码的 OBU 长度).
///
/// 一次切分只有一个写入者, 接收器不需要支持并发.
pub trait FrameSink {
    /// 追加一段保持明文的字节
    fn add_unencrypted_bytes(&mut self, bytes: &[u8]);

    /// 追加一段需要加密的字节
    fn add_encrypted_bytes(&mut self, bytes: &[u8]);

    /// 获取绑定的编解码器
    fn codec(&self) -> CodecId;

    /// 获取已声明的明文区间 (按输出帧偏移升序)
    fn unencrypted_ranges(&self) -> &[UnencryptedRange];
}
