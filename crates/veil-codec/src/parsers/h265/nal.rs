//! H.265/HEVC NAL 头部解析.

use veil_core::bitreader::BitReader;
use veil_core::{VeilError, VeilResult};

/// NAL 头部字节数
pub const NAL_HEADER_SIZE: usize = 2;

/// 类型编号小于此值的 NAL 为 VCL (切片数据)
pub const VCL_CUTOFF: u8 = 32;

/// HEVC NAL 头部
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HevcNalHeader {
    /// nal_unit_type
    pub nal_type: u8,
    /// nuh_layer_id
    pub layer_id: u8,
    /// nuh_temporal_id_plus1
    pub temporal_id_plus1: u8,
}

impl HevcNalHeader {
    /// 从 NAL 数据头部解析 (至少 2 字节)
    ///
    /// forbidden_zero_bit 不做校验, 切分只关心类型.
    pub fn parse(data: &[u8]) -> VeilResult<Self> {
        if data.len() < NAL_HEADER_SIZE {
            return Err(VeilError::Length(format!(
                "HEVC: NAL 头部不完整, len={}",
                data.len()
            )));
        }

        let mut br = BitReader::new(&data[..NAL_HEADER_SIZE]);
        br.skip_bits(1)?;
        let nal_type = br.read_bits(6)? as u8;
        let layer_id = br.read_bits(6)? as u8;
        let temporal_id_plus1 = br.read_bits(3)? as u8;

        Ok(Self {
            nal_type,
            layer_id,
            temporal_id_plus1,
        })
    }

    /// 是否为 VCL (Video Coding Layer) NAL
    pub fn is_vcl(&self) -> bool {
        self.nal_type < VCL_CUTOFF
    }
}
