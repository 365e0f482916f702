// 商户服务
// 负责商户认证和启动时的演示商户引导; 本范围内商户创建后不再变更

use crate::error::ServiceError;
use crate::models::Merchant;
use crate::utils::generate_api_key;
use sqlx::SqlitePool;

/// 演示商户的收款钱包地址
const DEMO_WALLET_ADDRESS: &str = "DEMO_QUBIC_WALLET";

/// 商户服务
pub struct MerchantService {
    pool: SqlitePool,
}

impl MerchantService {
    /// 创建新的商户服务实例
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 根据API密钥查找商户
    ///
    /// 所有商户维度的操作都经由此方法认证
    ///
    /// # Arguments
    /// * `api_key` - 请求携带的API密钥
    ///
    /// # Returns
    /// * 匹配的商户, 未知密钥返回 `ServiceError::Auth`
    pub async fn find_by_api_key(&self, api_key: &str) -> Result<Merchant, ServiceError> {
        sqlx::query_as::<_, Merchant>(
            "SELECT id, name, api_key, wallet_address FROM merchants WHERE api_key = ?",
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ServiceError::Auth)
    }

    /// 启动时自动创建演示商户
    ///
    /// 库中已有商户时不做任何事; 否则创建一个带随机密钥的演示商户并返回
    pub async fn bootstrap_demo(&self) -> Result<Option<Merchant>, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM merchants")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            return Ok(None);
        }

        // 16字节随机数 => 32位十六进制密钥
        let api_key = generate_api_key(16);
        let result =
            sqlx::query("INSERT INTO merchants (name, api_key, wallet_address) VALUES (?, ?, ?)")
                .bind("Demo Merchant")
                .bind(&api_key)
                .bind(DEMO_WALLET_ADDRESS)
                .execute(&mut *tx)
                .await?;
        let id = result.last_insert_rowid();

        tx.commit().await?;

        log::info!("Demo merchant created (id: {})", id);
        log::info!("Demo merchant API key: {}", api_key);

        Ok(Some(Merchant {
            id,
            name: "Demo Merchant".to_string(),
            api_key,
            wallet_address: DEMO_WALLET_ADDRESS.to_string(),
        }))
    }
}
