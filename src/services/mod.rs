// 服务层模块
// 所有不变量约束 (价格为正、资源名唯一、金额快照) 在这一层强制执行

pub mod merchant_service;
pub mod resource_service;
pub mod session_service;

// 重新导出服务
pub use merchant_service::MerchantService;
pub use resource_service::ResourceService;
pub use session_service::SessionService;
