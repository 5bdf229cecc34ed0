//! 编解码器标识符.
//!
//! 标识一帧数据所属的编码格式, 决定使用哪种切分规则.
//! 一次切分过程中编解码器固定不变.

use std::fmt;
use std::str::FromStr;

use veil_core::{MediaType, VeilError};

/// 编解码器标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodecId {
    /// 未知编解码器 (不可切分)
    #[default]
    None,

    // ========================
    // 音频编解码器
    // ========================
    /// Opus
    Opus,

    // ========================
    // 视频编解码器
    // ========================
    /// VP8
    Vp8,
    /// VP9
    Vp9,
    /// H.264 / AVC
    H264,
    /// H.265 / HEVC
    H265,
    /// AV1 (Alliance for Open Media)
    Av1,
}

impl CodecId {
    /// 获取编解码器对应的媒体类型
    pub const fn media_type(&self) -> MediaType {
        match self {
            Self::None => MediaType::Data,
            Self::Opus => MediaType::Audio,
            Self::Vp8 | Self::Vp9 | Self::H264 | Self::H265 | Self::Av1 => MediaType::Video,
        }
    }

    /// 获取编解码器的人类可读名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Opus => "opus",
            Self::Vp8 => "vp8",
            Self::Vp9 => "vp9",
            Self::H264 => "h264",
            Self::H265 => "hevc",
            Self::Av1 => "av1",
        }
    }

    /// 密文中是否可能出现被误判的 Annex B 起始码
    ///
    /// 只有 H.264/H.265 的打包器按起始码切分帧, 其它编解码器无需加密后校验.
    pub const fn uses_annex_b(&self) -> bool {
        matches!(self, Self::H264 | Self::H265)
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CodecId {
    type Err = VeilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opus" => Ok(Self::Opus),
            "vp8" => Ok(Self::Vp8),
            "vp9" => Ok(Self::Vp9),
            "h264" | "avc" => Ok(Self::H264),
            "h265" | "hevc" => Ok(Self::H265),
            "av1" => Ok(Self::Av1),
            other => Err(VeilError::InvalidArgument(format!(
                "不支持的编解码器: {other}"
            ))),
        }
    }
}
