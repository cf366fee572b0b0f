// ==========================================
// 动物园 - 缎带仓储
// ==========================================
// 对齐: m_ribbon (name)
// 对齐: t_ribbon_animal (name, animal_id)
// ==========================================
// 并发: 佩戴 (upsert) 的存在检查与写入在同一个 IMMEDIATE 事务中完成，
//       并发写入方在 busy_timeout 内排队
// ==========================================

use crate::db::ConnectionProvider;
use crate::domain::{AnimalFactory, AnimalId, RibbonMap};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, TransactionBehavior};
use std::sync::Arc;

/// 佩戴结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibbonUpsert {
    Inserted,
    Updated,
}

// ==========================================
// RibbonRepository - 缎带仓储
// ==========================================
pub struct RibbonRepository {
    provider: ConnectionProvider,
    factory: Arc<dyn AnimalFactory>,
}

impl RibbonRepository {
    pub fn new(provider: ConnectionProvider, factory: Arc<dyn AnimalFactory>) -> Self {
        Self { provider, factory }
    }

    /// 缎带主数据中的全部缎带名
    pub fn find_names(&self) -> RepositoryResult<Vec<String>> {
        let conn = self.provider.open()?;
        let mut stmt = conn.prepare("SELECT name FROM m_ribbon")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    /// 缎带名 → 佩戴中动物
    ///
    /// 同名缎带出现多行时保留首次出现的位置、最后一行的动物。
    pub fn find_map(&self) -> RepositoryResult<RibbonMap> {
        let conn = self.provider.open()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT t1.name AS ribbon_name, t2.id, t2.cage_cd, t2.animal_cd, t2.weight
            FROM t_ribbon_animal t1
            JOIN t_cage_animal t2 ON t1.animal_id = t2.id
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            let ribbon_name: String = row.get(0)?;
            let id: AnimalId = row.get(1)?;
            let cage_code: i32 = row.get(2)?;
            let species_code: i32 = row.get(3)?;
            let weight: i32 = row.get(4)?;
            Ok((ribbon_name, id, cage_code, species_code, weight))
        })?;

        let mut map = RibbonMap::default();
        for row in rows {
            let (ribbon_name, id, cage_code, species_code, weight) = row?;
            let animal = self.factory.create_animal(id, cage_code, species_code, weight);
            map.insert(ribbon_name, animal);
        }
        Ok(map)
    }

    /// 为动物佩戴缎带
    ///
    /// 已有同名佩戴记录时改写 animal_id，否则新增。
    pub fn upsert(&self, animal_id: AnimalId, ribbon_name: &str) -> RepositoryResult<RibbonUpsert> {
        let mut conn = self.provider.open()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM t_ribbon_animal WHERE name = ?1)",
            params![ribbon_name],
            |row| row.get(0),
        )?;

        let outcome = if exists {
            tx.execute(
                "UPDATE t_ribbon_animal SET animal_id = ?1 WHERE name = ?2",
                params![animal_id, ribbon_name],
            )?;
            RibbonUpsert::Updated
        } else {
            tx.execute(
                "INSERT INTO t_ribbon_animal (name, animal_id) VALUES (?1, ?2)",
                params![ribbon_name, animal_id],
            )?;
            RibbonUpsert::Inserted
        };

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        tracing::debug!(ribbon = ribbon_name, animal_id, ?outcome, "ribbon assigned");
        Ok(outcome)
    }

    /// 摘下缎带
    ///
    /// # 返回
    /// - Ok(true): 删除了佩戴记录
    /// - Ok(false): 该缎带未被佩戴
    pub fn remove(&self, ribbon_name: &str) -> RepositoryResult<bool> {
        let conn = self.provider.open()?;
        let affected = conn.execute(
            "DELETE FROM t_ribbon_animal WHERE name = ?1",
            params![ribbon_name],
        )?;
        Ok(affected > 0)
    }
}
