// 商户数据模型
// 商户通过唯一的API密钥认证, 拥有若干计费资源

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 商户信息模型
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Merchant {
    /// 商户唯一标识符
    pub id: i64,
    /// 商户名称
    pub name: String,
    /// API访问密钥 (32位十六进制随机串, 不在API响应中返回)
    #[serde(skip_serializing)]
    pub api_key: String,
    /// 收款钱包地址
    pub wallet_address: String,
}
