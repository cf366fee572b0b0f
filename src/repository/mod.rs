// ==========================================
// 动物园 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// 约束: 每次调用独占一个会话，返回前释放
// ==========================================

pub mod animal_type_repo;
pub mod cage_animal_repo;
pub mod cage_repo;
pub mod error;
pub mod report_repo;
pub mod ribbon_repo;

// 重导出核心仓储
pub use animal_type_repo::AnimalTypeRepository;
pub use cage_animal_repo::CageAnimalRepository;
pub use cage_repo::CageRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use report_repo::ReportRepository;
pub use ribbon_repo::{RibbonRepository, RibbonUpsert};
