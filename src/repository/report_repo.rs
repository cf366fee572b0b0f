// ==========================================
// 动物园 - 饲养一览报表仓储
// ==========================================
// t_cage_animal INNER JOIN m_cage
//               LEFT JOIN t_ribbon_animal
// 不排序：保持数据库返回顺序
// ==========================================

use crate::db::ConnectionProvider;
use crate::domain::AnimalInfo;
use crate::repository::error::RepositoryResult;

pub struct ReportRepository {
    provider: ConnectionProvider,
}

impl ReportRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// 每只饲养中的动物一行
    pub fn find_all_animal_info(&self) -> RepositoryResult<Vec<AnimalInfo>> {
        let conn = self.provider.open()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT t1.id, m1.name AS cage_name, t1.weight, t1.name, t2.name AS ribbon_name
            FROM t_cage_animal t1
            JOIN m_cage m1 ON t1.cage_cd = m1.cd
            LEFT JOIN t_ribbon_animal t2 ON t1.id = t2.animal_id
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(AnimalInfo {
                    animal_id: row.get(0)?,
                    cage_name: row.get(1)?,
                    weight: row.get(2)?,
                    animal_name: row.get(3)?,
                    ribbon_name: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}
