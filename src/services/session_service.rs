// 支付会话服务
// 会话生命周期: pending -> paid; 金额在创建时快照, 永不重算

use crate::error::ServiceError;
use crate::models::{Merchant, PaymentSession, Resource, SessionStatus};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// 支付会话服务
pub struct SessionService {
    pool: SqlitePool,
}

impl SessionService {
    /// 创建新的会话服务实例
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 为资源创建支付会话
    ///
    /// 资源必须存在且属于该商户, 否则返回 `NotFound`。
    /// 没有幂等键: 同一资源+钱包重复调用会得到互相独立的新会话
    ///
    /// # Arguments
    /// * `merchant` - 已认证的商户
    /// * `resource_id` - 要付费使用的资源ID
    /// * `user_wallet` - 付款方钱包地址
    ///
    /// # Returns
    /// * 新建的会话, 状态为 `pending`, 金额为资源当前价格的快照
    pub async fn create(
        &self,
        merchant: &Merchant,
        resource_id: i64,
        user_wallet: &str,
    ) -> Result<PaymentSession, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let resource = sqlx::query_as::<_, Resource>(
            "SELECT id, merchant_id, name, description, price_qubic \
             FROM resources WHERE id = ? AND merchant_id = ?",
        )
        .bind(resource_id)
        .bind(merchant.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Invalid resource".to_string()))?;

        let session = PaymentSession {
            id: Uuid::new_v4().to_string(),
            resource_id: resource.id,
            user_wallet: user_wallet.to_string(),
            amount_qubic: resource.price_qubic,
            status: SessionStatus::Pending,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO sessions (id, resource_id, user_wallet, amount_qubic, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&session.id)
        .bind(session.resource_id)
        .bind(&session.user_wallet)
        .bind(session.amount_qubic)
        .bind(session.status)
        .bind(session.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        log::info!(
            "Created payment session {} for resource {} ({} qubic)",
            session.id,
            session.resource_id,
            session.amount_qubic
        );

        Ok(session)
    }

    /// 根据ID获取会话
    pub async fn get(&self, session_id: &str) -> Result<PaymentSession, ServiceError> {
        sqlx::query_as::<_, PaymentSession>(
            "SELECT id, resource_id, user_wallet, amount_qubic, status, created_at \
             FROM sessions WHERE id = ?",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Session not found".to_string()))
    }

    /// 将会话标记为已支付 (演示用)
    ///
    /// 无条件覆盖为 `paid`, 不校验当前状态, 因此对同一ID重复调用效果幂等。
    /// 仅未知ID返回 `NotFound`
    pub async fn mark_paid(&self, session_id: &str) -> Result<PaymentSession, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE sessions SET status = ? WHERE id = ?")
            .bind(SessionStatus::Paid)
            .bind(session_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if updated == 0 {
            return Err(ServiceError::NotFound("Session not found".to_string()));
        }

        let session = sqlx::query_as::<_, PaymentSession>(
            "SELECT id, resource_id, user_wallet, amount_qubic, status, created_at \
             FROM sessions WHERE id = ?",
        )
        .bind(session_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        log::info!("Session {} marked as paid", session_id);

        Ok(session)
    }

    /// 列出全部会话 (跨商户, 无过滤无分页)
    pub async fn list_all(&self) -> Result<Vec<PaymentSession>, ServiceError> {
        let sessions = sqlx::query_as::<_, PaymentSession>(
            "SELECT id, resource_id, user_wallet, amount_qubic, status, created_at \
             FROM sessions ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }
}
