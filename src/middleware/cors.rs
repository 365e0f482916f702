// CORS中间件配置
// 演示系统对所有来源开放, 与原有部署行为一致

use actix_cors::Cors;
use actix_web::http::header;

/// 创建CORS中间件
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
