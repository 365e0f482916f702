// 领域错误定义
// 每个store操作边界上检测到的错误直接翻译为HTTP响应, 不做重试

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// 领域错误分类
///
/// 处理器直接返回 `Result<HttpResponse, ServiceError>`,
/// 由 `ResponseError` 实现统一渲染 `{"success": false, "error": ...}` 信封
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 输入缺失或非法 (400)
    #[error("{0}")]
    Validation(String),
    /// API密钥无效 (401)
    #[error("Invalid API key")]
    Auth,
    /// 资源或会话不存在 (404)
    #[error("{0}")]
    NotFound(String),
    /// 资源名称重复 (400)
    #[error("{0}")]
    Conflict(String),
    /// 底层存储错误 (500, 对外隐藏细节)
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

/// 错误响应信封
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::Auth => StatusCode::UNAUTHORIZED,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            ServiceError::Database(e) => {
                log::error!("Database error: {}", e);
                Some(e.to_string())
            }
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.to_string(),
            details,
        })
    }
}

/// JSON请求体解析失败时的错误处理
///
/// 注册到 `web::JsonConfig`, 让解析错误也走统一的错误信封
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::Validation(err.to_string()).into()
}

/// 查询参数解析失败时的错误处理 (注册到 `web::QueryConfig`)
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::Validation(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ServiceError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ServiceError::Auth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ServiceError::NotFound("missing".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Conflict("dup".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_message() {
        assert_eq!(ServiceError::Auth.to_string(), "Invalid API key");
    }
}
