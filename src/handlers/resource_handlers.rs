// 计费资源API处理器
// 处理资源创建、查询等HTTP请求; 每个操作都先通过API密钥认证商户

use crate::error::ServiceError;
use crate::models::{ApiResponse, CreateResourceRequest, ListResourcesQuery};
use crate::services::{MerchantService, ResourceService};
use crate::state::AppState;
use crate::utils::InputValidator;
use actix_web::{web, HttpResponse};

/// 创建计费资源
///
/// POST /api/resources
///
/// 请求体: CreateResourceRequest
/// 响应: `{success, data: {id, name, description, price_qubic}}`
pub async fn create_resource(
    data: web::Data<AppState>,
    request: web::Json<CreateResourceRequest>,
) -> Result<HttpResponse, ServiceError> {
    let request = request.into_inner();

    let mut validator = InputValidator::new();
    let api_key = validator.require_str("api_key", request.api_key);
    let name = validator.require_str("name", request.name);
    let price_qubic = validator.require_i64("price_qubic", request.price_qubic);
    validator.into_result()?;

    let merchant = MerchantService::new(data.db_pool.clone())
        .find_by_api_key(&api_key)
        .await?;

    let resource = ResourceService::new(data.db_pool.clone())
        .create(&merchant, &name, request.description.as_deref(), price_qubic)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(resource.to_response())))
}

/// 列出商户的全部资源
///
/// GET /api/resources?api_key=...
///
/// 响应: `{success, data: [{id, name, description, price_qubic}, ...]}`
pub async fn list_resources(
    data: web::Data<AppState>,
    query: web::Query<ListResourcesQuery>,
) -> Result<HttpResponse, ServiceError> {
    let api_key = match query.api_key.as_deref() {
        Some(key) if !key.trim().is_empty() => key,
        _ => return Err(ServiceError::Validation("API key required".to_string())),
    };

    let merchant = MerchantService::new(data.db_pool.clone())
        .find_by_api_key(api_key)
        .await?;

    let resources = ResourceService::new(data.db_pool.clone())
        .list_by_merchant(&merchant)
        .await?;

    let output: Vec<_> = resources.iter().map(|r| r.to_response()).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(output)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::api_routes;
    use crate::state::AppState;
    use actix_web::{test, App};

    async fn setup_state_with_merchant() -> (AppState, String) {
        let state = AppState::new_for_test().await;
        let merchant = MerchantService::new(state.db_pool.clone())
            .bootstrap_demo()
            .await
            .unwrap()
            .unwrap();
        let api_key = merchant.api_key;
        (state, api_key)
    }

    #[actix_web::test]
    async fn test_create_resource_success() {
        let (state, api_key) = setup_state_with_merchant().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(api_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/resources")
            .set_json(serde_json::json!({
                "api_key": api_key,
                "name": "api-call",
                "description": "one call",
                "price_qubic": 5
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "api-call");
        assert_eq!(body["data"]["description"], "one call");
        assert_eq!(body["data"]["price_qubic"], 5);
    }

    #[actix_web::test]
    async fn test_create_resource_missing_fields() {
        let (state, api_key) = setup_state_with_merchant().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(api_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/resources")
            .set_json(serde_json::json!({ "api_key": api_key, "name": "api-call" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required fields");
    }

    #[actix_web::test]
    async fn test_create_resource_invalid_api_key() {
        let (state, _api_key) = setup_state_with_merchant().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(api_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/resources")
            .set_json(serde_json::json!({
                "api_key": "wrong-key",
                "name": "api-call",
                "price_qubic": 5
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid API key");
    }

    #[actix_web::test]
    async fn test_create_resource_mistyped_body_gets_error_envelope() {
        let (state, api_key) = setup_state_with_merchant().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(
                    web::JsonConfig::default().error_handler(crate::error::json_error_handler),
                )
                .service(api_routes()),
        )
        .await;

        // price_qubic传成字符串: 解析失败也必须走统一错误信封
        let req = test::TestRequest::post()
            .uri("/api/resources")
            .set_json(serde_json::json!({
                "api_key": api_key,
                "name": "api-call",
                "price_qubic": "5"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_create_resource_non_positive_price() {
        let (state, api_key) = setup_state_with_merchant().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(api_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/resources")
            .set_json(serde_json::json!({
                "api_key": api_key,
                "name": "api-call",
                "price_qubic": 0
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Price must be greater than 0");
    }

    #[actix_web::test]
    async fn test_list_resources_requires_api_key() {
        let (state, _api_key) = setup_state_with_merchant().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(api_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/resources").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "API key required");
    }

    #[actix_web::test]
    async fn test_list_resources_returns_created() {
        let (state, api_key) = setup_state_with_merchant().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(api_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/resources")
            .set_json(serde_json::json!({
                "api_key": api_key,
                "name": "api-call",
                "price_qubic": 5
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/api/resources?api_key={}", api_key))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["name"], "api-call");
    }
}
