//! 出站帧处理器.
//!
//! [`FrameSink`] 的标准实现: 记录切分器声明的明文/密文片段,
//! 合并相邻明文区间, 并为外部加密引擎准备待加密字节与密文缓冲区.

use log::{debug, trace, warn};
use veil_core::VeilResult;

use crate::codec_id::CodecId;
use crate::sink::{FrameSink, UnencryptedRange};
use crate::splitters;

/// 出站帧处理器
///
/// 每次 [`process_frame`](Self::process_frame) 都会清空上一帧的状态,
/// 同一实例可在单线程内反复复用以避免重新分配.
#[derive(Debug, Default)]
pub struct OutboundFrameProcessor {
    /// 当前帧的编解码器
    codec: CodecId,
    /// 输出帧写入游标
    frame_index: usize,
    /// 所有明文片段 (按声明顺序拼接)
    unencrypted_bytes: Vec<u8>,
    /// 所有待加密片段 (按声明顺序拼接)
    encrypted_bytes: Vec<u8>,
    /// 外部加密引擎写入的密文, 长度与 `encrypted_bytes` 相同
    ciphertext_bytes: Vec<u8>,
    /// 明文区间表
    unencrypted_ranges: Vec<UnencryptedRange>,
}

impl OutboundFrameProcessor {
    /// 创建空的处理器
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建绑定到指定编解码器的处理器
    ///
    /// 适用于直接调用单个切分函数的场景.
    pub fn with_codec(codec: CodecId) -> Self {
        Self {
            codec,
            ..Self::default()
        }
    }

    /// 清空所有状态
    pub fn reset(&mut self) {
        self.codec = CodecId::None;
        self.clear_ranges();
    }

    fn clear_ranges(&mut self) {
        self.frame_index = 0;
        self.unencrypted_bytes.clear();
        self.encrypted_bytes.clear();
        self.ciphertext_bytes.clear();
        self.unencrypted_ranges.clear();
    }

    /// 切分一帧数据
    ///
    /// 失败时清空已声明的片段并返回错误, 调用方不应使用部分结果.
    pub fn process_frame(&mut self, frame: &[u8], codec: CodecId) -> VeilResult<()> {
        self.reset();
        self.codec = codec;
        self.unencrypted_bytes.reserve(frame.len());
        self.encrypted_bytes.reserve(frame.len());

        if let Err(err) = splitters::split_frame(self, frame) {
            warn!("{codec}: 帧切分失败, size={}, err={err}", frame.len());
            self.clear_ranges();
            return Err(err);
        }

        debug!(
            "{codec} ({}): 帧切分完成, input={}, output={}, unencrypted={}, encrypted={}, ranges={}",
            codec.media_type(),
            frame.len(),
            self.frame_index,
            self.unencrypted_bytes.len(),
            self.encrypted_bytes.len(),
            self.unencrypted_ranges.len()
        );
        Ok(())
    }

    /// 输出帧的总字节数
    pub fn output_size(&self) -> usize {
        self.frame_index
    }

    /// 所有明文片段
    pub fn unencrypted_bytes(&self) -> &[u8] {
        &self.unencrypted_bytes
    }

    /// 所有待加密片段 (交给加密引擎的明文)
    pub fn encrypted_bytes(&self) -> &[u8] {
        &self.encrypted_bytes
    }

    /// 密文缓冲区
    pub fn ciphertext_bytes(&self) -> &[u8] {
        &self.ciphertext_bytes
    }

    /// 可写密文缓冲区, 长度等于 [`encrypted_bytes`](Self::encrypted_bytes)
    pub fn ciphertext_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.ciphertext_bytes
    }
}

impl FrameSink for OutboundFrameProcessor {
    fn add_unencrypted_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        match self.unencrypted_ranges.last_mut() {
            // 紧接上一段明文, 直接扩展
            Some(last) if last.end() == self.frame_index => last.size += bytes.len(),
            _ => self
                .unencrypted_ranges
                .push(UnencryptedRange::new(self.frame_index, bytes.len())),
        }

        trace!(
            "{}: 明文片段 offset={}, size={}",
            self.codec,
            self.frame_index,
            bytes.len()
        );
        self.unencrypted_bytes.extend_from_slice(bytes);
        self.frame_index += bytes.len();
    }

    fn add_encrypted_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        trace!(
            "{}: 密文片段 offset={}, size={}",
            self.codec,
            self.frame_index,
            bytes.len()
        );
        self.encrypted_bytes.extend_from_slice(bytes);
        // 密文缓冲区与待加密字节始终等长
        self.ciphertext_bytes.resize(self.encrypted_bytes.len(), 0);
        self.frame_index += bytes.len();
    }

    fn codec(&self) -> CodecId {
        self.codec
    }

    fn unencrypted_ranges(&self) -> &[UnencryptedRange] {
        &self.unencrypted_ranges
    }
}
