// 计费资源服务
// 负责资源创建和查询; 资源在本范围内不修改、不删除

use crate::error::ServiceError;
use crate::models::{Merchant, Resource};
use sqlx::SqlitePool;

/// 计费资源服务
pub struct ResourceService {
    pool: SqlitePool,
}

impl ResourceService {
    /// 创建新的资源服务实例
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 为商户创建计费资源
    ///
    /// 重名检查和插入在同一个事务内完成, 出错时事务随drop回滚
    ///
    /// # Arguments
    /// * `merchant` - 已认证的商户
    /// * `name` - 资源名称 (同一商户下唯一)
    /// * `description` - 资源描述 (缺省为空串)
    /// * `price_qubic` - 单次使用价格, 必须为正
    ///
    /// # Returns
    /// * 新建的资源记录
    pub async fn create(
        &self,
        merchant: &Merchant,
        name: &str,
        description: Option<&str>,
        price_qubic: i64,
    ) -> Result<Resource, ServiceError> {
        if price_qubic <= 0 {
            return Err(ServiceError::Validation(
                "Price must be greater than 0".to_string(),
            ));
        }

        let description = description.unwrap_or_default().to_string();

        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM resources WHERE merchant_id = ? AND name = ?")
                .bind(merchant.id)
                .bind(name)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(
                "Resource already exists".to_string(),
            ));
        }

        let result = sqlx::query(
            "INSERT INTO resources (merchant_id, name, description, price_qubic) VALUES (?, ?, ?, ?)",
        )
        .bind(merchant.id)
        .bind(name)
        .bind(&description)
        .bind(price_qubic)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        tx.commit().await?;

        log::info!(
            "Created resource '{}' (id: {}) for merchant {}",
            name,
            id,
            merchant.id
        );

        Ok(Resource {
            id,
            merchant_id: merchant.id,
            name: name.to_string(),
            description,
            price_qubic,
        })
    }

    /// 列出商户的全部资源 (按插入顺序)
    pub async fn list_by_merchant(&self, merchant: &Merchant) -> Result<Vec<Resource>, ServiceError> {
        let resources = sqlx::query_as::<_, Resource>(
            "SELECT id, merchant_id, name, description, price_qubic \
             FROM resources WHERE merchant_id = ? ORDER BY id",
        )
        .bind(merchant.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(resources)
    }
}
