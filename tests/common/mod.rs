//! 集成测试公共工具

use veil::codec::{FrameSink, OutboundFrameProcessor};

/// 初始化测试日志 (重复调用无副作用)
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 按明文区间表交错拼装明文片段与密文, 得到最终输出帧
pub fn assemble_output(processor: &OutboundFrameProcessor) -> Vec<u8> {
    let unencrypted = processor.unencrypted_bytes();
    let ciphertext = processor.ciphertext_bytes();
    let mut output = Vec::with_capacity(processor.output_size());
    let mut plain_pos = 0usize;
    let mut cipher_pos = 0usize;

    for range in processor.unencrypted_ranges() {
        let gap = range.offset - output.len();
        output.extend_from_slice(&ciphertext[cipher_pos..cipher_pos + gap]);
        cipher_pos += gap;
        output.extend_from_slice(&unencrypted[plain_pos..plain_pos + range.size]);
        plain_pos += range.size;
    }
    output.extend_from_slice(&ciphertext[cipher_pos..]);
    output
}
