// QubiPay 数据模型定义
// 包含商户、计费资源、支付会话等核心数据结构

mod merchant;
mod resource;
mod session;

// 重新导出核心类型
pub use merchant::*;
pub use resource::*;
pub use session::*;

use serde::Serialize;

/// 标准API响应格式: `{"success": true, "data": ...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// 请求是否成功
    pub success: bool,
    /// 响应数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}
