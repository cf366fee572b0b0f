// ==========================================
// 动物园 - API 层
// ==========================================
// 职责: 提供数据访问接口，统一错误包装
// ==========================================

pub mod db_access;
pub mod error;

// 重导出核心类型
pub use db_access::DbAccess;
pub use error::{ErrorKind, FailedStep, SystemError, SystemResult};
