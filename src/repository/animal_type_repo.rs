// ==========================================
// 动物园 - 动物主数据仓储
// ==========================================
// 对齐: m_animal (cd, name, type)
// ==========================================

use crate::db::ConnectionProvider;
use crate::domain::{AnimalType, Species};
use crate::repository::error::{RepositoryError, RepositoryResult};

pub struct AnimalTypeRepository {
    provider: ConnectionProvider,
}

impl AnimalTypeRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// 查询全部动物种类，type 列解析为物种句柄
    pub fn find_all(&self) -> RepositoryResult<Vec<AnimalType>> {
        let conn = self.provider.open()?;
        let mut stmt = conn.prepare("SELECT cd, name, type FROM m_animal")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut animal_types = Vec::new();
        for row in rows {
            let (code, name, tag) = row?;
            let species = match Species::from_tag(&tag) {
                Some(species) => species,
                None => return Err(RepositoryError::UnknownSpecies { code, tag }),
            };
            animal_types.push(AnimalType { code, name, species });
        }
        Ok(animal_types)
    }
}
