// 支付会话API处理器
// 处理会话创建、状态查询和演示用的mock-paid标记

use crate::error::ServiceError;
use crate::models::{
    ApiResponse, CreateSessionRequest, CreateSessionResponse, MockPaidResponse,
};
use crate::services::{MerchantService, SessionService};
use crate::state::AppState;
use crate::utils::InputValidator;
use actix_web::{web, HttpResponse};

/// 创建按次付费会话
///
/// POST /api/pay-per-use
///
/// 请求体: CreateSessionRequest
/// 响应: `{success, data: {session_id, amount_qubic, pay_to_wallet, status}}`
pub async fn create_payment_session(
    data: web::Data<AppState>,
    request: web::Json<CreateSessionRequest>,
) -> Result<HttpResponse, ServiceError> {
    let request = request.into_inner();

    let mut validator = InputValidator::new();
    let api_key = validator.require_str("api_key", request.api_key);
    let resource_id = validator.require_i64("resource_id", request.resource_id);
    let user_wallet = validator.require_str("user_wallet", request.user_wallet);
    validator.into_result()?;

    let merchant = MerchantService::new(data.db_pool.clone())
        .find_by_api_key(&api_key)
        .await?;

    let session = SessionService::new(data.db_pool.clone())
        .create(&merchant, resource_id, &user_wallet)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(CreateSessionResponse {
        session_id: session.id,
        amount_qubic: session.amount_qubic,
        pay_to_wallet: merchant.wallet_address,
        status: session.status,
    })))
}

/// 查询会话状态
///
/// GET /api/sessions/{session_id}
///
/// 无需认证
/// 响应: `{success, data: {session_id, resource_id, user_wallet, amount_qubic, status}}`
pub async fn get_session_status(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let session_id = path.into_inner();

    let session = SessionService::new(data.db_pool.clone())
        .get(&session_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(session.to_status_response())))
}

/// 将会话标记为已支付 (仅演示)
///
/// POST /api/sessions/{session_id}/mock-paid
///
/// 不校验当前状态, 重复调用效果幂等
/// 响应: `{success, data: {message, session_id, status}}`
pub async fn mark_session_paid(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let session_id = path.into_inner();

    let session = SessionService::new(data.db_pool.clone())
        .mark_paid(&session_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MockPaidResponse {
        message: "Payment marked as PAID (demo)".to_string(),
        session_id: session.id,
        status: session.status,
    })))
}

/// 列出全部会话
///
/// GET /api/sessions/all
///
/// 跨商户、无认证、无分页的裸数组响应 (与既有接口保持一致)
pub async fn list_all_sessions(
    data: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let sessions = SessionService::new(data.db_pool.clone()).list_all().await?;

    let output: Vec<_> = sessions.iter().map(|s| s.to_summary()).collect();
    Ok(HttpResponse::Ok().json(output))
}
