// 数据验证工具函数
// 请求体字段全部为Option, 由验证器统一检查必填字段

use crate::error::ServiceError;

/// 必填字段验证器
///
/// `require_*` 在记录缺失的同时返回解包后的值 (缺失时为占位值),
/// 调用方在 `into_result` 通过后才可使用这些值。
/// 缺失或空白的字段统一报 "Missing required fields", 与原有接口行为保持一致
pub struct InputValidator {
    missing: Vec<&'static str>,
}

impl InputValidator {
    /// 创建新的验证器
    pub fn new() -> Self {
        Self {
            missing: Vec::new(),
        }
    }

    /// 验证并解包必填字符串字段 (空白视为缺失)
    pub fn require_str(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    /// 验证并解包必填数值字段
    pub fn require_i64(&mut self, field: &'static str, value: Option<i64>) -> i64 {
        match value {
            Some(v) => v,
            None => {
                self.missing.push(field);
                0
            }
        }
    }

    /// 检查是否有验证错误
    pub fn has_errors(&self) -> bool {
        !self.missing.is_empty()
    }

    /// 转换为错误结果
    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.has_errors() {
            log::debug!("Missing required fields: {}", self.missing.join(", "));
            return Err(ServiceError::Validation(
                "Missing required fields".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
