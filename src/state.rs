// 应用状态管理
// 包含数据库连接池、配置信息等全局状态

use crate::config::Config;
use sqlx::SqlitePool;

/// 应用全局状态
///
/// 进程启动时构造一次, 通过 `web::Data` 注入到各处理器, 不使用全局单例
pub struct AppState {
    /// 数据库连接池
    pub db_pool: SqlitePool,
    /// 应用配置
    pub config: Config,
}

impl AppState {
    /// 创建新的应用状态实例
    pub fn new(db_pool: SqlitePool, config: Config) -> Self {
        Self { db_pool, config }
    }

    /// 创建测试用的应用状态 (内存数据库 + 默认配置)
    #[cfg(test)]
    pub async fn new_for_test() -> Self {
        use sqlx::sqlite::SqlitePoolOptions;

        // 内存库只能用单连接, 否则每个连接看到的是不同的库
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!()
            .run(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::new(db_pool, Config::default())
    }
}
