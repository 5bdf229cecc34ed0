//! H.264 NAL 头部解析.
//!
//! # NAL 头部 (1 字节)
//! ```text
//! ┌─────────────────────────────────────┐
//! │ forbidden(1) | ref_idc(2) | type(5) │
//! └─────────────────────────────────────┘
//! ```

use std::fmt;

/// NAL 头部字节数
pub const NAL_HEADER_SIZE: usize = 1;

/// NAL 类型字段掩码
const NAL_TYPE_MASK: u8 = 0x1F;

/// NAL 单元类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NalUnitType {
    /// 非 IDR 图像切片 (P/B slice)
    Slice,
    /// 数据分区 A/B/C
    SliceDataPartition(u8),
    /// IDR 图像切片 (关键帧)
    SliceIdr,
    /// 增补增强信息 (SEI)
    Sei,
    /// 序列参数集 (SPS)
    Sps,
    /// 图像参数集 (PPS)
    Pps,
    /// 访问单元分隔符 (AUD)
    Aud,
    /// 填充数据
    FillerData,
    /// 其它类型
    Other(u8),
}

impl NalUnitType {
    /// 从 NAL 头部字节解析类型
    pub fn from_header(header: u8) -> Self {
        match header & NAL_TYPE_MASK {
            1 => Self::Slice,
            id @ 2..=4 => Self::SliceDataPartition(id),
            5 => Self::SliceIdr,
            6 => Self::Sei,
            7 => Self::Sps,
            8 => Self::Pps,
            9 => Self::Aud,
            12 => Self::FillerData,
            id => Self::Other(id),
        }
    }

    /// 获取类型编号
    pub fn type_id(&self) -> u8 {
        match self {
            Self::Slice => 1,
            Self::SliceDataPartition(id) => *id,
            Self::SliceIdr => 5,
            Self::Sei => 6,
            Self::Sps => 7,
            Self::Pps => 8,
            Self::Aud => 9,
            Self::FillerData => 12,
            Self::Other(id) => *id,
        }
    }

    /// 是否只需暴露切片头前部 (其余负载可加密)
    ///
    /// 打包器/解包器只会读取普通切片与 IDR 切片的 PPS id,
    /// 其它 NAL (参数集、SEI 等) 必须整体保持明文.
    pub fn has_encryptable_payload(&self) -> bool {
        matches!(self, Self::Slice | Self::SliceIdr)
    }
}

impl fmt::Display for NalUnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slice => write!(f, "Slice"),
            Self::SliceDataPartition(id) => write!(f, "SliceDP({id})"),
            Self::SliceIdr => write!(f, "IDR"),
            Self::Sei => write!(f, "SEI"),
            Self::Sps => write!(f, "SPS"),
            Self::Pps => write!(f, "PPS"),
            Self::Aud => write!(f, "AUD"),
            Self::FillerData => write!(f, "Filler"),
            Self::Other(id) => write!(f, "Other({id})"),
        }
    }
}
