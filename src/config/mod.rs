// ==========================================
// 动物园 - 配置层
// ==========================================
// 职责: 数据库连接参数、性能追踪开关、消息语言
// ==========================================

pub mod db_config;

// 重导出
pub use db_config::{default_db_path, DbConfig, DEFAULT_DB_NAME};
