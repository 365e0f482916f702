mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod utils;

use crate::config::Config;
use crate::services::MerchantService;
use crate::state::AppState;
use actix_web::{web, App, HttpServer};
use chrono::Local;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::error::Error;
use std::io;
use std::io::Write;
use std::str::FromStr;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 初始化日志
    let mut log_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    log_builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.args()
            )
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
        })
        .init();

    // 加载配置
    let config = Config::from_env()?;
    config.validate()?;

    // 建立数据库连接池并执行迁移
    let connect_options =
        SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let db_pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await?;
    sqlx::migrate!().run(&db_pool).await?;

    // 库为空时自动创建演示商户
    MerchantService::new(db_pool.clone()).bootstrap_demo().await?;

    let bind_address = config.bind_address();
    let workers = config.server.workers;
    let app_state = web::Data::new(AppState::new(db_pool, config));

    info!("QubiPay backend listening on {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            // 请求解析失败也要返回统一的错误信封
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
            .wrap(middleware::create_cors())
            .wrap(actix_web::middleware::Logger::default())
            .service(routes::api_routes())
            .route("/", web::get().to(handlers::home))
    })
    .bind(&bind_address)?;

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
