// 健康检查API处理器

use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;

/// 存活探针响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 请求是否成功
    pub success: bool,
    /// 服务状态描述
    pub status: String,
}

/// 存活探针
///
/// GET /
///
/// 无需认证, 不访问数据库
pub async fn home() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        success: true,
        status: "QubiPay backend running".to_string(),
    }))
}
