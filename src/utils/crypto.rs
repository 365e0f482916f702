// 加密工具函数
// 提供商户API密钥生成等安全功能

use rand::Rng;

/// 生成随机API密钥
///
/// # Arguments
/// * `num_bytes` - 随机字节数 (输出为两倍长度的十六进制字符串)
///
/// # Returns
/// * 十六进制格式的随机密钥
pub fn generate_api_key(num_bytes: usize) -> String {
    let mut bytes = vec![0u8; num_bytes];
    rand::thread_rng().fill(bytes.as_mut_slice());
    hex::encode(bytes)
}
