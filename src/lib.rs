// ==========================================
// 动物园 - 核心库
// ==========================================
// 技术栈: Rust + SQLite (rusqlite)
// 定位: 檻・动物・缎带 数据访问层
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与判别符注册表
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// API 层 - 对外操作与错误包装
pub mod api;

// 配置层 - 连接参数
pub mod config;

// 数据库基础设施（会话提供者/PRAGMA 统一）
pub mod db;

// SQL 计数与操作耗时
pub mod perf;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use api::{DbAccess, ErrorKind, SystemError, SystemResult};
pub use config::DbConfig;
pub use db::{ConnectionProvider, SessionStats};
pub use domain::{
    Animal, AnimalFactory, AnimalId, AnimalInfo, AnimalType, Cage, CageType,
    CatalogAnimalFactory, PlainAnimalFactory, RibbonMap, Species,
};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
