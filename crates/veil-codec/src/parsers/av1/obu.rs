//! AV1 OBU 头部解析.
//!
//! ```text
//!  0 1 2 3 4 5 6 7
//! +-+-+-+-+-+-+-+-+
//! |F|   T   |E|S|R|
//! +-+-+-+-+-+-+-+-+
//! ```
//! - F: forbidden bit
//! - T: OBU 类型 (4 位)
//! - E: 是否携带扩展字节
//! - S: 是否携带 obu_size 字段
//! - R: 保留位

use veil_core::VeilResult;
use veil_core::bitreader::BitReader;

/// "携带长度" 标志位
pub const OBU_HAS_SIZE_MASK: u8 = 0b0000_0010;

/// 扩展头部字节数
pub const OBU_EXTENSION_SIZE: usize = 1;

/// OBU 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObuType {
    /// 序列头
    SequenceHeader,
    /// 时间分隔符
    TemporalDelimiter,
    /// 帧头
    FrameHeader,
    /// Tile 组
    TileGroup,
    /// 元数据
    Metadata,
    /// 帧 (帧头 + Tile 组)
    Frame,
    /// 冗余帧头
    RedundantFrameHeader,
    /// Tile 列表
    TileList,
    /// 填充
    Padding,
    /// 保留类型
    Reserved(u8),
}

impl ObuType {
    /// 从 4 位类型编号创建
    pub fn from_type_id(id: u8) -> Self {
        match id {
            1 => Self::SequenceHeader,
            2 => Self::TemporalDelimiter,
            3 => Self::FrameHeader,
            4 => Self::TileGroup,
            5 => Self::Metadata,
            6 => Self::Frame,
            7 => Self::RedundantFrameHeader,
            8 => Self::TileList,
            15 => Self::Padding,
            id => Self::Reserved(id),
        }
    }

    /// 打包器会丢弃的 OBU 类型, 切分时同样不输出
    pub fn dropped_by_packetizer(&self) -> bool {
        matches!(
            self,
            Self::TemporalDelimiter | Self::TileList | Self::Padding
        )
    }
}

/// 解析后的 OBU 头部
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObuHeader {
    /// 原始头部字节
    pub raw: u8,
    /// OBU 类型
    pub obu_type: ObuType,
    /// 是否携带扩展字节
    pub has_extension: bool,
    /// 是否携带 obu_size
    pub has_size: bool,
}

impl ObuHeader {
    /// 从头部字节解析
    pub fn parse(raw: u8) -> VeilResult<Self> {
        let bytes = [raw];
        let mut br = BitReader::new(&bytes);
        br.skip_bits(1)?;
        let obu_type = ObuType::from_type_id(br.read_bits(4)? as u8);
        let has_extension = br.read_flag()?;
        let has_size = br.read_flag()?;

        Ok(Self {
            raw,
            obu_type,
            has_extension,
            has_size,
        })
    }

    /// 清除 "携带长度" 标志后的头部字节
    pub fn without_size_flag(&self) -> u8 {
        self.raw & !OBU_HAS_SIZE_MASK
    }
}
