// 中间件模块

pub mod cors;

// 重新导出中间件
pub use cors::*;
