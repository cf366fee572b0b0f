// ==========================================
// 动物园 - 檻主数据仓储
// ==========================================
// 对齐: m_cage (cd, name, type)
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::db::ConnectionProvider;
use crate::domain::{Cage, CageType};
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// CageRepository - 檻主数据仓储
// ==========================================
pub struct CageRepository {
    provider: ConnectionProvider,
}

impl CageRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// 查询全部檻，按 type 列实例化对应的檻类型
    ///
    /// # 返回
    /// - Ok(Vec<Cage>): 数据库返回顺序
    /// - Err(UnknownCageType): 存在无法解析的判别符
    /// - Err: 数据库错误
    pub fn find_all(&self) -> RepositoryResult<Vec<Cage>> {
        let conn = self.provider.open()?;
        let mut stmt = conn.prepare("SELECT cd, name, type FROM m_cage")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut cages = Vec::new();
        for row in rows {
            let (code, name, tag) = row?;
            let variant = match CageType::from_tag(&tag) {
                Some(variant) => variant,
                None => return Err(RepositoryError::UnknownCageType { code, tag }),
            };
            cages.push(Cage::new(variant, name).with_code(code));
        }
        Ok(cages)
    }
}
