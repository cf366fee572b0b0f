// ==========================================
// 动物园 - 数据访问 API
// ==========================================
// 职责: 对外暴露檻/动物/缎带/报表操作
// 约束: 每个操作独立打开并释放会话，不持有可变状态
// 约束: 仓储层错误在操作边界包装为 SystemError
// ==========================================

use crate::api::error::{FailedStep, SystemResult, WrapFailure};
use crate::config::DbConfig;
use crate::db::{ConnectionProvider, SessionStats};
use crate::domain::{
    Animal, AnimalFactory, AnimalId, AnimalInfo, AnimalType, Cage, PlainAnimalFactory, RibbonMap,
};
use crate::perf::PerfGuard;
use crate::repository::{
    AnimalTypeRepository, CageAnimalRepository, CageRepository, ReportRepository,
    RibbonRepository, RibbonUpsert,
};
use std::sync::Arc;

// ==========================================
// DbAccess - 数据访问句柄
// ==========================================
pub struct DbAccess {
    provider: ConnectionProvider,
    cage_repo: CageRepository,
    animal_type_repo: AnimalTypeRepository,
    cage_animal_repo: CageAnimalRepository,
    ribbon_repo: RibbonRepository,
    report_repo: ReportRepository,
}

impl DbAccess {
    /// 初始化（使用不解析物种的动物工厂）
    ///
    /// # 返回
    /// - Err(Init): 配置无效或 SQLite 不满足要求
    pub fn init(config: DbConfig) -> SystemResult<Self> {
        Self::with_factory(config, Arc::new(PlainAnimalFactory))
    }

    /// 指定动物工厂初始化
    pub fn with_factory(config: DbConfig, factory: Arc<dyn AnimalFactory>) -> SystemResult<Self> {
        let provider = ConnectionProvider::new(config).or_fail(FailedStep::Init)?;
        Ok(Self::from_provider(provider, factory))
    }

    pub fn from_provider(provider: ConnectionProvider, factory: Arc<dyn AnimalFactory>) -> Self {
        Self {
            cage_repo: CageRepository::new(provider.clone()),
            animal_type_repo: AnimalTypeRepository::new(provider.clone()),
            cage_animal_repo: CageAnimalRepository::new(provider.clone(), Arc::clone(&factory)),
            ribbon_repo: RibbonRepository::new(provider.clone(), factory),
            report_repo: ReportRepository::new(provider.clone()),
            provider,
        }
    }

    /// 会话计数（用于检测会话泄漏）
    pub fn session_stats(&self) -> &SessionStats {
        self.provider.stats()
    }

    // ==========================================
    // 主数据
    // ==========================================

    /// 檻一览
    pub fn get_cages(&self) -> SystemResult<Vec<Cage>> {
        let _perf = PerfGuard::new("get_cages");
        self.cage_repo.find_all().or_fail(FailedStep::CageMaster)
    }

    /// 动物种类一览
    pub fn get_animal_type_list(&self) -> SystemResult<Vec<AnimalType>> {
        let _perf = PerfGuard::new("get_animal_type_list");
        self.animal_type_repo
            .find_all()
            .or_fail(FailedStep::AnimalMaster)
    }

    // ==========================================
    // 饲养动物
    // ==========================================

    /// 按 id 取得动物；不存在时返回 None
    pub fn get_animal(&self, id: AnimalId) -> SystemResult<Option<Animal>> {
        let _perf = PerfGuard::new("get_animal");
        self.cage_animal_repo
            .find_by_id(id)
            .or_fail(FailedStep::CageAnimalRead)
    }

    /// 檻内的动物
    pub fn get_animals(&self, cage: &Cage) -> SystemResult<Vec<Animal>> {
        let _perf = PerfGuard::new("get_animals");
        self.cage_animal_repo
            .find_by_cage(cage.code)
            .or_fail(FailedStep::CageAnimalRead)
    }

    /// 把动物放入檻（id 由数据库分配，name 列保持 NULL）
    pub fn add_animal_to_cage(&self, cage: &Cage, species_code: i32, weight: i32) -> SystemResult<()> {
        let _perf = PerfGuard::new("add_animal_to_cage");
        let id = self
            .cage_animal_repo
            .insert(cage.code, species_code, weight, None)
            .or_fail(FailedStep::CageAnimalWrite)?;
        tracing::info!(cage = cage.code, species_code, weight, id, "animal added");
        Ok(())
    }

    /// 带名字放入檻，报表中的动物名列由此填充
    pub fn add_named_animal_to_cage(
        &self,
        cage: &Cage,
        species_code: i32,
        weight: i32,
        name: &str,
    ) -> SystemResult<()> {
        let _perf = PerfGuard::new("add_named_animal_to_cage");
        let id = self
            .cage_animal_repo
            .insert(cage.code, species_code, weight, Some(name))
            .or_fail(FailedStep::CageAnimalWrite)?;
        tracing::info!(cage = cage.code, species_code, weight, id, name, "animal added");
        Ok(())
    }

    // ==========================================
    // 缎带
    // ==========================================

    /// 缎带名一览
    pub fn get_ribbon_names(&self) -> SystemResult<Vec<String>> {
        let _perf = PerfGuard::new("get_ribbon_names");
        self.ribbon_repo
            .find_names()
            .or_fail(FailedStep::RibbonMaster)
    }

    /// 缎带名 → 佩戴中动物
    pub fn get_ribbon_map(&self) -> SystemResult<RibbonMap> {
        let _perf = PerfGuard::new("get_ribbon_map");
        self.ribbon_repo
            .find_map()
            .or_fail(FailedStep::RibbonAnimalRead)
    }

    /// 佩戴缎带（已被其他动物佩戴时改为此动物）
    pub fn set_ribbon(&self, animal: &Animal, ribbon_name: &str) -> SystemResult<()> {
        let _perf = PerfGuard::new("set_ribbon");
        let outcome = self
            .ribbon_repo
            .upsert(animal.id, ribbon_name)
            .or_fail(FailedStep::RibbonAnimalWrite)?;
        if outcome == RibbonUpsert::Updated {
            tracing::info!(ribbon = ribbon_name, animal_id = animal.id, "ribbon moved");
        }
        Ok(())
    }

    /// 摘下缎带；未佩戴时返回 false
    pub fn remove_ribbon(&self, ribbon_name: &str) -> SystemResult<bool> {
        let _perf = PerfGuard::new("remove_ribbon");
        self.ribbon_repo
            .remove(ribbon_name)
            .or_fail(FailedStep::RibbonAnimalDelete)
    }

    // ==========================================
    // 报表
    // ==========================================

    /// 饲养一览（结构化）
    pub fn get_all_animal_info(&self) -> SystemResult<Vec<AnimalInfo>> {
        let _perf = PerfGuard::new("get_all_animal_info");
        self.report_repo
            .find_all_animal_info()
            .or_fail(FailedStep::Report)
    }

    /// 饲养一览（制表符分隔的文本行）
    pub fn get_all_animal_inf_list(&self) -> SystemResult<Vec<String>> {
        Ok(self
            .get_all_animal_info()?
            .iter()
            .map(AnimalInfo::to_string)
            .collect())
    }
}

impl std::fmt::Debug for DbAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbAccess")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

