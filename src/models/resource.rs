// 计费资源数据模型
// 资源归属于单个商户, (merchant_id, name) 唯一, 价格为最小货币单位的正整数

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 计费资源模型
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Resource {
    /// 资源唯一标识符
    pub id: i64,
    /// 所属商户ID
    pub merchant_id: i64,
    /// 资源名称 (同一商户下唯一)
    pub name: String,
    /// 资源描述
    pub description: String,
    /// 单次使用价格 (QUBIC最小单位)
    pub price_qubic: i64,
}

/// 创建资源请求
///
/// 字段全部为Option, 缺失字段在处理器中统一报 "Missing required fields"
#[derive(Debug, Deserialize)]
pub struct CreateResourceRequest {
    /// 商户API密钥
    pub api_key: Option<String>,
    /// 资源名称
    pub name: Option<String>,
    /// 资源描述 (可选, 默认为空)
    pub description: Option<String>,
    /// 单次使用价格
    pub price_qubic: Option<i64>,
}

/// 资源列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListResourcesQuery {
    /// 商户API密钥
    pub api_key: Option<String>,
}

/// 资源API响应格式
#[derive(Debug, Serialize)]
pub struct ResourceResponse {
    /// 资源ID
    pub id: i64,
    /// 资源名称
    pub name: String,
    /// 资源描述
    pub description: String,
    /// 单次使用价格
    pub price_qubic: i64,
}

impl Resource {
    /// 转换为API响应格式 (不暴露merchant_id)
    pub fn to_response(&self) -> ResourceResponse {
        ResourceResponse {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price_qubic: self.price_qubic,
        }
    }
}
