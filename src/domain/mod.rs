// ==========================================
// 动物园 - 领域模型层
// ==========================================
// 职责: 定义檻、动物、缎带等领域实体与判别符注册表
// 红线: 不含数据访问逻辑
// ==========================================

pub mod animal;
pub mod cage;
pub mod report;
pub mod ribbon;
pub mod types;

// 重导出核心类型
pub use animal::{Animal, AnimalFactory, AnimalId, AnimalType, CatalogAnimalFactory, PlainAnimalFactory};
pub use cage::Cage;
pub use report::AnimalInfo;
pub use ribbon::RibbonMap;
pub use types::{CageType, Species};
