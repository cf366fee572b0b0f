// ==========================================
// 动物园 - SQLite 会话提供者
// ==========================================
// 目标:
// - 每次操作打开一个新会话，返回前释放（成功/失败均释放）
// - 统一 PRAGMA 与 busy_timeout
// - 以计数器记录会话打开/释放次数，便于检测泄漏
// ==========================================

use crate::config::DbConfig;
use crate::perf;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{Connection, OpenFlags};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// 所需的最低 SQLite 版本（外键约束自 3.6.19 起生效）
pub const MIN_SQLITE_VERSION: i32 = 3_006_019;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection, busy_timeout_ms: u64) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(busy_timeout_ms))?;
    Ok(())
}

// ==========================================
// SessionStats - 会话计数
// ==========================================
#[derive(Debug, Default)]
pub struct SessionStats {
    opened: AtomicU64,
    released: AtomicU64,
}

impl SessionStats {
    pub fn opened(&self) -> u64 {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> u64 {
        self.released.load(Ordering::SeqCst)
    }

    /// 尚未释放的会话数
    pub fn in_use(&self) -> u64 {
        self.opened().saturating_sub(self.released())
    }
}

// ==========================================
// Session - 单次操作的数据库会话
// ==========================================
/// Drop 时关闭连接并计入释放次数
pub struct Session {
    conn: Connection,
    stats: Arc<SessionStats>,
}

impl Deref for Session {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stats.released.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(target: "session", "released");
    }
}

// ==========================================
// ConnectionProvider - 会话提供者
// ==========================================
/// 无状态句柄：只持有连接配置与会话计数，可廉价克隆
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    config: Arc<DbConfig>,
    stats: Arc<SessionStats>,
}

impl ConnectionProvider {
    /// 初始化
    ///
    /// # 返回
    /// - Ok: 可用句柄
    /// - Err(InvalidConfig / UnsupportedSqlite): 句柄不可用
    pub fn new(config: DbConfig) -> RepositoryResult<Self> {
        config.validate()?;

        let found = rusqlite::version_number();
        if found < MIN_SQLITE_VERSION {
            return Err(RepositoryError::UnsupportedSqlite {
                found,
                required: MIN_SQLITE_VERSION,
            });
        }

        tracing::debug!(
            database = %config.database_path.display(),
            sqlite = rusqlite::version(),
            "connection provider initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            stats: Arc::new(SessionStats::default()),
        })
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// 打开一个新会话
    pub fn open(&self) -> RepositoryResult<Session> {
        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.config.create_if_missing {
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let mut conn = Connection::open_with_flags(&self.config.database_path, flags)
            .map_err(|e| connect_error(&self.config, e))?;
        configure_sqlite_connection(&conn, self.config.busy_timeout_ms)
            .map_err(|e| connect_error(&self.config, e))?;
        perf::install_sqlite_tracing(&mut conn, &self.config);

        self.stats.opened.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(target: "session", "opened");

        Ok(Session {
            conn,
            stats: Arc::clone(&self.stats),
        })
    }
}

fn connect_error(config: &DbConfig, err: rusqlite::Error) -> RepositoryError {
    RepositoryError::DatabaseConnectionError(format!(
        "{}: {}",
        config.database_path.display(),
        err
    ))
}
