//! 帧切分集成测试
//!
//! 按 "切分 -> 外部加密 -> 按区间表拼回输出帧" 的完整流程验证各编解码器.

use veil::codec::{
    CodecId, FrameSink, OutboundFrameProcessor, UnencryptedRange, split_frame,
};
use veil::core::VeilError;

mod common;

use common::{assemble_output, init_test_logger};

/// 恒等 "加密": 密文即待加密字节, 便于检查拼装结果
fn split_and_assemble(frame: &[u8], codec: CodecId) -> (OutboundFrameProcessor, Vec<u8>) {
    let mut processor = OutboundFrameProcessor::new();
    processor
        .process_frame(frame, codec)
        .unwrap_or_else(|e| panic!("{codec} 切分失败: {e}"));
    let plain = processor.encrypted_bytes().to_vec();
    processor.ciphertext_bytes_mut().copy_from_slice(&plain);
    let output = assemble_output(&processor);
    (processor, output)
}

// ============================================================
// H.264
// ============================================================

/// 构造典型的 H.264 Annex B 码流 (SPS + PPS + IDR + P)
fn build_typical_h264() -> Vec<u8> {
    let mut data = Vec::new();

    // SPS (4字节起始码)
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
    data.extend_from_slice(&[0x67, 0x42, 0x00, 0x1E, 0xAB, 0xCD]);

    // PPS (3字节起始码)
    data.extend_from_slice(&[0x00, 0x00, 0x01]);
    data.extend_from_slice(&[0x68, 0xCE, 0x38, 0x80]);

    // IDR 切片 (4字节起始码)
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
    data.extend_from_slice(&[0x65, 0x88, 0x80, 0x40, 0x00, 0xFF, 0xFE]);

    // P 切片 (3字节起始码)
    data.extend_from_slice(&[0x00, 0x00, 0x01]);
    data.extend_from_slice(&[0x41, 0x9A, 0x01, 0x02, 0x03]);

    data
}

/// 起始码全部规范化为 4 字节后的期望输出
fn build_typical_h264_normalized() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E, 0xAB, 0xCD]);
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x68, 0xCE, 0x38, 0x80]);
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x65, 0x88, 0x80, 0x40, 0x00, 0xFF, 0xFE]);
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x41, 0x9A, 0x01, 0x02, 0x03]);
    data
}

#[test]
fn test_h264_typical_frame_ranges() {
    init_test_logger();
    let frame = build_typical_h264();
    let (processor, output) = split_and_assemble(&frame, CodecId::H264);

    // SPS + PPS + IDR 头部连成一个区间; P 切片头部单独一个区间
    assert_eq!(
        processor.unencrypted_ranges(),
        &[UnencryptedRange::new(0, 25), UnencryptedRange::new(29, 6)]
    );
    assert_eq!(
        processor.encrypted_bytes(),
        &[0x40, 0x00, 0xFF, 0xFE, 0x01, 0x02, 0x03]
    );
    assert_eq!(processor.output_size(), frame.len() + 2);
    assert_eq!(output, build_typical_h264_normalized());
}

#[test]
fn test_h264_ranges_partition_output() {
    let frame = build_typical_h264();
    let (processor, _) = split_and_assemble(&frame, CodecId::H264);

    let unencrypted: usize = processor.unencrypted_ranges().iter().map(|r| r.size).sum();
    assert_eq!(unencrypted, processor.unencrypted_bytes().len());
    assert_eq!(
        unencrypted + processor.encrypted_bytes().len(),
        processor.output_size()
    );

    // 区间严格递增且互不相邻 (相邻区间已合并)
    for pair in processor.unencrypted_ranges().windows(2) {
        assert!(pair[0].end() < pair[1].offset);
    }
}

#[test]
fn test_h264_split_is_deterministic() {
    let frame = build_typical_h264();
    let mut processor = OutboundFrameProcessor::new();

    processor.process_frame(&frame, CodecId::H264).unwrap();
    let first_ranges = processor.unencrypted_ranges().to_vec();
    let first_encrypted = processor.encrypted_bytes().to_vec();

    processor.process_frame(&frame, CodecId::H264).unwrap();
    assert_eq!(processor.unencrypted_ranges(), first_ranges.as_slice());
    assert_eq!(processor.encrypted_bytes(), first_encrypted.as_slice());
}

#[test]
fn test_h264_corrupt_slice_header_reported() {
    let mut frame = vec![0x00, 0x00, 0x00, 0x01, 0x65];
    frame.extend_from_slice(&[0x00; 6]);
    frame.push(0x80);

    let mut processor = OutboundFrameProcessor::new();
    let err = processor
        .process_frame(&frame, CodecId::H264)
        .expect_err("32 个前导零应判为损坏");
    assert!(matches!(err, VeilError::Length(_)));
    assert_eq!(processor.output_size(), 0);
}

// ============================================================
// H.265
// ============================================================

#[test]
fn test_h265_frame_with_parameter_sets() {
    init_test_logger();
    let frame = [
        0x00, 0x00, 0x00, 0x01, 0x40, 0x01, 0x0C, 0x01, // VPS
        0x00, 0x00, 0x00, 0x01, 0x42, 0x01, 0x01, 0x60, // SPS
        0x00, 0x00, 0x00, 0x01, 0x44, 0x01, 0xC1, // PPS
        0x00, 0x00, 0x00, 0x01, 0x26, 0x01, 0xAF, 0x06, 0xB8, // IDR_W_RADL
    ];
    let codec: CodecId = "hevc".parse().unwrap();
    let (processor, output) = split_and_assemble(&frame, codec);

    assert_eq!(processor.unencrypted_ranges(), &[UnencryptedRange::new(0, 29)]);
    assert_eq!(processor.encrypted_bytes(), &[0xAF, 0x06, 0xB8]);
    assert_eq!(output, frame);
}

// ============================================================
// AV1
// ============================================================

#[test]
fn test_av1_temporal_unit() {
    init_test_logger();
    let frame = [
        0x12, 0x00, // 时间分隔符
        0x0A, 0x02, 0x00, 0x01, // 序列头, size=2
        0x32, 0x03, 0xA1, 0xA2, 0xA3, // Frame OBU, size=3
    ];
    let (processor, output) = split_and_assemble(&frame, CodecId::Av1);

    assert_eq!(
        processor.unencrypted_ranges(),
        &[UnencryptedRange::new(0, 2), UnencryptedRange::new(4, 1)]
    );
    // 时间分隔符被丢弃, 最后一个 OBU 去掉长度字段
    assert_eq!(output, vec![0x0A, 0x02, 0x00, 0x01, 0x30, 0xA1, 0xA2, 0xA3]);
    assert_eq!(processor.output_size(), 8);
}

#[test]
fn test_av1_truncated_payload_rejected() {
    let mut processor = OutboundFrameProcessor::new();
    let err = processor
        .process_frame(&[0x32, 0x10, 0x01, 0x02], CodecId::Av1)
        .expect_err("负载越界应返回错误");
    assert!(matches!(err, VeilError::InvalidData(_)));
    assert!(processor.unencrypted_ranges().is_empty());
}

// ============================================================
// VP8 / VP9 / Opus
// ============================================================

#[test]
fn test_vp8_key_and_delta_frames() {
    let mut key_frame = vec![0x50, 0x42, 0x00, 0x9D, 0x01, 0x2A, 0x80, 0x02, 0xE0, 0x01];
    key_frame.extend_from_slice(&[0x11; 6]);
    let (processor, output) = split_and_assemble(&key_frame, CodecId::Vp8);
    assert_eq!(processor.unencrypted_ranges(), &[UnencryptedRange::new(0, 10)]);
    assert_eq!(processor.encrypted_bytes(), &[0x11; 6]);
    assert_eq!(output, key_frame);

    let delta_frame = [0x31, 0x22, 0x33, 0x44];
    let (processor, _) = split_and_assemble(&delta_frame, CodecId::Vp8);
    assert_eq!(processor.unencrypted_ranges(), &[UnencryptedRange::new(0, 1)]);
    assert_eq!(processor.encrypted_bytes(), &[0x22, 0x33, 0x44]);
}

#[test]
fn test_fully_encrypted_codecs() {
    let frame = [0x00, 0x00, 0x01, 0x65, 0x88];
    for codec in [CodecId::Opus, CodecId::Vp9] {
        let (processor, output) = split_and_assemble(&frame, codec);
        assert!(processor.unencrypted_ranges().is_empty(), "{codec}");
        assert_eq!(processor.encrypted_bytes(), &frame, "{codec}");
        assert_eq!(output, frame, "{codec}");
    }
}

// ============================================================
// 通用入口
// ============================================================

#[test]
fn test_split_frame_with_custom_sink() {
    /// 只统计字节数的接收器
    #[derive(Default)]
    struct CountingSink {
        unencrypted: usize,
        encrypted: usize,
        ranges: Vec<UnencryptedRange>,
    }

    impl FrameSink for CountingSink {
        fn add_unencrypted_bytes(&mut self, bytes: &[u8]) {
            self.ranges.push(UnencryptedRange::new(
                self.unencrypted + self.encrypted,
                bytes.len(),
            ));
            self.unencrypted += bytes.len();
        }

        fn add_encrypted_bytes(&mut self, bytes: &[u8]) {
            self.encrypted += bytes.len();
        }

        fn codec(&self) -> CodecId {
            CodecId::Vp8
        }

        fn unencrypted_ranges(&self) -> &[UnencryptedRange] {
            &self.ranges
        }
    }

    let mut sink = CountingSink::default();
    split_frame(&mut sink, &[0x01, 0x02, 0x03]).unwrap();
    assert_eq!(sink.unencrypted, 1);
    assert_eq!(sink.encrypted, 2);
}

#[test]
fn test_invalid_inputs() {
    let mut processor = OutboundFrameProcessor::new();
    assert!(matches!(
        processor.process_frame(&[], CodecId::H264),
        Err(VeilError::InvalidArgument(_))
    ));
    assert!(matches!(
        processor.process_frame(&[0x01], CodecId::None),
        Err(VeilError::InvalidArgument(_))
    ));
    assert!("mpeg2".parse::<CodecId>().is_err());
}
