// 支付会话数据模型
// 会话记录单次支付尝试: 金额在创建时快照, 之后只随状态转移变化

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 支付会话模型
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PaymentSession {
    /// 会话唯一标识符 (UUID v4)
    pub id: String,
    /// 关联的资源ID
    pub resource_id: i64,
    /// 付款方钱包地址
    pub user_wallet: String,
    /// 应付金额 (创建时对资源价格的快照, 之后不再重算)
    pub amount_qubic: i64,
    /// 会话状态
    pub status: SessionStatus,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 会话状态枚举
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// 待支付 (初始状态)
    Pending,
    /// 已支付 (终态)
    Paid,
    /// 已过期 (保留值: 当前没有任何超时逻辑会写入该状态)
    Expired,
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Pending
    }
}

/// 创建支付会话请求 (POST /api/pay-per-use)
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// 商户API密钥
    pub api_key: Option<String>,
    /// 要付费使用的资源ID
    pub resource_id: Option<i64>,
    /// 付款方钱包地址
    pub user_wallet: Option<String>,
}

/// 创建支付会话响应
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    /// 会话ID
    pub session_id: String,
    /// 应付金额
    pub amount_qubic: i64,
    /// 商户收款钱包地址
    pub pay_to_wallet: String,
    /// 会话状态
    pub status: SessionStatus,
}

/// 会话状态查询响应
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    /// 会话ID
    pub session_id: String,
    /// 关联的资源ID
    pub resource_id: i64,
    /// 付款方钱包地址
    pub user_wallet: String,
    /// 应付金额
    pub amount_qubic: i64,
    /// 会话状态
    pub status: SessionStatus,
}

/// mock-paid响应
#[derive(Debug, Serialize)]
pub struct MockPaidResponse {
    /// 提示信息
    pub message: String,
    /// 会话ID
    pub session_id: String,
    /// 会话状态
    pub status: SessionStatus,
}

/// 会话列表条目 (GET /api/sessions/all)
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    /// 会话ID
    pub session_id: String,
    /// 应付金额
    pub amount_qubic: i64,
    /// 会话状态
    pub status: SessionStatus,
}

impl PaymentSession {
    /// 检查会话是否已支付
    pub fn is_paid(&self) -> bool {
        self.status == SessionStatus::Paid
    }

    /// 转换为状态查询响应格式
    pub fn to_status_response(&self) -> SessionStatusResponse {
        SessionStatusResponse {
            session_id: self.id.clone(),
            resource_id: self.resource_id,
            user_wallet: self.user_wallet.clone(),
            amount_qubic: self.amount_qubic,
            status: self.status,
        }
    }

    /// 转换为列表条目格式
    pub fn to_summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id.clone(),
            amount_qubic: self.amount_qubic,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(SessionStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
        assert_eq!(
            serde_json::to_value(SessionStatus::Paid).unwrap(),
            serde_json::json!("paid")
        );
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(SessionStatus::default(), SessionStatus::Pending);
    }
}
