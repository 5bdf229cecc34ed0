//! 加密后校验与区间表集成测试
//!
//! 模拟发送端流程: 切分, 加密, 校验, 校验失败时换 nonce 重新加密.

use veil::codec::{
    CodecId, FrameSink, OutboundFrameProcessor, deserialize_unencrypted_ranges,
    serialize_unencrypted_ranges, validate_encrypted_frame, validate_unencrypted_ranges,
};

mod common;

use common::{assemble_output, init_test_logger};

/// 简单的异或 "加密引擎", 每个 nonce 对应一个固定密钥字节
fn encrypt(processor: &mut OutboundFrameProcessor, nonce: u8) {
    let plain = processor.encrypted_bytes().to_vec();
    for (dst, src) in processor.ciphertext_bytes_mut().iter_mut().zip(plain) {
        *dst = src ^ nonce;
    }
}

fn build_h264_frame() -> Vec<u8> {
    vec![
        0x00, 0x00, 0x00, 0x01, 0x65, 0x88, 0x80, // IDR 头部
        0x5A, 0x5A, 0x5B, 0x10, // 切片数据
        0x00, 0x00, 0x00, 0x01, 0x41, 0xE0, // P 切片头部
        0x20, 0x30, // 切片数据
    ]
}

#[test]
fn test_retry_with_new_nonce_until_valid() {
    init_test_logger();
    let frame = build_h264_frame();
    let mut processor = OutboundFrameProcessor::new();
    processor.process_frame(&frame, CodecId::H264).unwrap();
    assert_eq!(processor.encrypted_bytes(), &[0x5A, 0x5A, 0x5B, 0x10, 0x20, 0x30]);

    // nonce=0x5A 使密文以 00 00 01 开头, 接收端会误切 NAL
    encrypt(&mut processor, 0x5A);
    let output = assemble_output(&processor);
    assert_eq!(&output[7..10], &[0x00, 0x00, 0x01]);
    assert!(!validate_encrypted_frame(&processor, &output));

    // 换 nonce 后通过
    encrypt(&mut processor, 0xC3);
    let output = assemble_output(&processor);
    assert!(validate_encrypted_frame(&processor, &output));
    assert_eq!(output.len(), processor.output_size());
}

#[test]
fn test_av1_skips_start_code_validation() {
    let frame = [0x32, 0x03, 0x00, 0x00, 0x01];
    let mut processor = OutboundFrameProcessor::new();
    processor.process_frame(&frame, CodecId::Av1).unwrap();
    encrypt(&mut processor, 0);

    let output = assemble_output(&processor);
    assert_eq!(output, vec![0x30, 0x00, 0x00, 0x01]);
    assert!(validate_encrypted_frame(&processor, &output));
}

#[test]
fn test_range_table_travels_with_frame() {
    let frame = build_h264_frame();
    let mut processor = OutboundFrameProcessor::new();
    processor.process_frame(&frame, CodecId::H264).unwrap();

    let ranges = processor.unencrypted_ranges();
    let table = serialize_unencrypted_ranges(ranges);
    // (0, 7), (11, 6)
    assert_eq!(table, vec![0x00, 0x07, 0x0B, 0x06]);

    let decoded = deserialize_unencrypted_ranges(&table).unwrap();
    assert_eq!(decoded.as_slice(), ranges);
    assert!(validate_unencrypted_ranges(&decoded, processor.output_size()));
    assert!(!validate_unencrypted_ranges(&decoded, 16));
}

#[test]
fn test_range_table_rejects_truncation() {
    assert!(deserialize_unencrypted_ranges(&[0x00]).is_err());
    assert!(deserialize_unencrypted_ranges(&[0x80]).is_err());
}
