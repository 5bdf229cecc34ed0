//! 统一错误类型定义.
//!
//! 所有 Veil crate 共用的错误类型, 切分过程中同步产生并直接向调用方传播.

use thiserror::Error;

/// Veil 统一错误类型
#[derive(Debug, Error)]
pub enum VeilError {
    /// 无效参数 (调用方违反前置条件, 如空帧或不支持的编解码器)
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 长度/格式错误 (帧过短, 指数哥伦布前缀过长等)
    #[error("长度错误: {0}")]
    Length(String),

    /// 无效数据 (结构损坏的码流, 如越界的 OBU 或非法 LEB128)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// 已到达数据末尾
    #[error("已到达数据末尾")]
    Eof,
}

/// Veil 统一 Result 类型
pub type VeilResult<T> = Result<T, VeilError>;
