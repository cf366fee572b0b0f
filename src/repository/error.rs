// ==========================================
// 动物园 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 仓储层只描述技术原因，面向用户的消息由 api::error 包装
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 初始化/连接错误 =====
    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("SQLite 版本过低: found={found}, required>={required}")]
    UnsupportedSqlite { found: i32, required: i32 },

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    // ===== 数据库错误 =====
    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(String),

    #[error("数据库事务失败: {0}")]
    DatabaseTransactionError(String),

    #[error("唯一约束违反: {0}")]
    UniqueConstraintViolation(String),

    #[error("外键约束违反: {0}")]
    ForeignKeyViolation(String),

    // ===== 判别符错误 =====
    #[error("未知的檻类型: cd={code}, type={tag}")]
    UnknownCageType { code: i32, tag: String },

    #[error("未知的动物种类: cd={code}, type={tag}")]
    UnknownSpecies { code: i32, tag: String },
}

impl RepositoryError {
    /// 是否为会话建立阶段的错误
    pub fn is_connection_error(&self) -> bool {
        matches!(self, RepositoryError::DatabaseConnectionError(_))
    }
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
