// API处理器模块
// 处理器只做字段验证和响应组装, 不变量约束在服务层

pub mod health_handlers;
pub mod resource_handlers;
pub mod session_handlers;

// 重新导出处理器
pub use health_handlers::*;
pub use resource_handlers::*;
pub use session_handlers::*;
