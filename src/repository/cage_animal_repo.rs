// ==========================================
// 动物园 - 饲养动物仓储
// ==========================================
// 对齐: t_cage_animal (id, cage_cd, animal_cd, weight, name)
// 约束: 具体动物由 AnimalFactory 按 (id, animal_cd, weight) 构造
// ==========================================

use crate::db::ConnectionProvider;
use crate::domain::{Animal, AnimalFactory, AnimalId};
use crate::repository::error::RepositoryResult;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

// ==========================================
// CageAnimalRepository - 饲养动物仓储
// ==========================================
pub struct CageAnimalRepository {
    provider: ConnectionProvider,
    factory: Arc<dyn AnimalFactory>,
}

impl CageAnimalRepository {
    pub fn new(provider: ConnectionProvider, factory: Arc<dyn AnimalFactory>) -> Self {
        Self { provider, factory }
    }

    /// 按主键查询
    ///
    /// # 返回
    /// - Ok(Some(Animal)): 找到
    /// - Ok(None): 未找到
    /// - Err: 数据库错误
    pub fn find_by_id(&self, id: AnimalId) -> RepositoryResult<Option<Animal>> {
        let conn = self.provider.open()?;
        let animal = conn
            .query_row(
                "SELECT id, cage_cd, animal_cd, weight FROM t_cage_animal WHERE id = ?1",
                params![id],
                |row| self.map_animal(row),
            )
            .optional()?;
        Ok(animal)
    }

    /// 查询檻内全部动物（数据库返回顺序）
    pub fn find_by_cage(&self, cage_code: i32) -> RepositoryResult<Vec<Animal>> {
        let conn = self.provider.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, cage_cd, animal_cd, weight FROM t_cage_animal WHERE cage_cd = ?1",
        )?;
        let animals = stmt
            .query_map(params![cage_code], |row| self.map_animal(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(animals)
    }

    /// 登记动物，返回数据库分配的 id
    ///
    /// name 为 None 时 name 列保持 NULL。
    pub fn insert(
        &self,
        cage_code: i32,
        species_code: i32,
        weight: i32,
        name: Option<&str>,
    ) -> RepositoryResult<AnimalId> {
        let conn = self.provider.open()?;
        conn.execute(
            "INSERT INTO t_cage_animal (cage_cd, animal_cd, weight, name) VALUES (?1, ?2, ?3, ?4)",
            params![cage_code, species_code, weight, name],
        )?;
        Ok(conn.last_insert_rowid())
    }

    // 列顺序: id, cage_cd, animal_cd, weight
    fn map_animal(&self, row: &Row<'_>) -> rusqlite::Result<Animal> {
        let id: AnimalId = row.get(0)?;
        let cage_code: i32 = row.get(1)?;
        let species_code: i32 = row.get(2)?;
        let weight: i32 = row.get(3)?;
        Ok(self.factory.create_animal(id, cage_code, species_code, weight))
    }
}
