// API路由配置
// 定义所有HTTP接口的路由规则

use crate::handlers::*;
use actix_web::{web, Scope};

/// /api 下的全部路由
pub fn api_routes() -> Scope {
    web::scope("/api")
        // 计费资源
        .route("/resources", web::post().to(create_resource))
        .route("/resources", web::get().to(list_resources))
        // 按次付费会话
        .route("/pay-per-use", web::post().to(create_payment_session))
        .service(session_routes())
}

/// 支付会话路由
///
/// "/all" 必须先注册, 否则会被 "/{session_id}" 捕获
fn session_routes() -> Scope {
    web::scope("/sessions")
        .route("/all", web::get().to(list_all_sessions))
        .route("/{session_id}", web::get().to(get_session_status))
        .route("/{session_id}/mock-paid", web::post().to(mark_session_paid))
}
