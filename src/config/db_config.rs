// ==========================================
// 动物园 - 数据库连接配置
// ==========================================
// 来源优先级: 内置默认值 → JSON 文件 → 环境变量
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认数据库名
pub const DEFAULT_DB_NAME: &str = "alpha";

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 默认语言
pub const DEFAULT_LOCALE: &str = "ja";

// 环境变量
pub const ENV_DB_PATH: &str = "ZOO_DB_PATH";
pub const ENV_BUSY_TIMEOUT_MS: &str = "ZOO_DB_BUSY_TIMEOUT_MS";
pub const ENV_PERF_SQL: &str = "ZOO_DB_PERF_SQL";
pub const ENV_SLOW_SQL_MS: &str = "ZOO_DB_SLOW_SQL_MS";
pub const ENV_LOCALE: &str = "ZOO_DB_LOCALE";

// ==========================================
// DbConfig - 连接配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// SQLite 数据库文件路径
    pub database_path: PathBuf,
    pub busy_timeout_ms: u64,
    /// 文件不存在时是否新建（默认不新建，视为连接失败）
    pub create_if_missing: bool,
    /// 是否开启 SQL 计数/慢查询日志
    pub perf_sql: bool,
    /// 慢 SQL 阈值（毫秒），0 表示不记录
    pub slow_sql_ms: u64,
    /// 错误消息语言
    pub locale: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database_path: default_db_path(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            create_if_missing: false,
            perf_sql: cfg!(debug_assertions),
            slow_sql_ms: if cfg!(debug_assertions) { 50 } else { 200 },
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl DbConfig {
    /// 指定数据库路径，其余使用默认值
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: path.into(),
            ..Self::default()
        }
    }

    /// 默认值 + 环境变量覆写
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// 读取 JSON 配置文件（缺省字段取默认值），再应用环境变量覆写
    pub fn from_json_file(path: &Path) -> RepositoryResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        let mut config: DbConfig = serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        config.apply_env();
        Ok(config)
    }

    /// 应用环境变量覆写（无法解析的值忽略）
    pub fn apply_env(&mut self) {
        if let Some(path) = env_trimmed(ENV_DB_PATH) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(ms) = env_trimmed(ENV_BUSY_TIMEOUT_MS).and_then(|v| v.parse().ok()) {
            self.busy_timeout_ms = ms;
        }
        if let Some(v) = env_trimmed(ENV_PERF_SQL) {
            self.perf_sql = is_true(&v);
        }
        if let Some(ms) = env_trimmed(ENV_SLOW_SQL_MS).and_then(|v| v.parse().ok()) {
            self.slow_sql_ms = ms;
        }
        if let Some(locale) = env_trimmed(ENV_LOCALE) {
            self.locale = locale;
        }
    }

    /// 校验配置
    pub fn validate(&self) -> RepositoryResult<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(RepositoryError::InvalidConfig(
                "database_path 不能为空".to_string(),
            ));
        }
        Ok(())
    }
}

/// 默认数据库路径
///
/// 优先使用用户数据目录下的 zoo-db/alpha.db，取不到时回退到当前目录。
pub fn default_db_path() -> PathBuf {
    let file_name = format!("{}.db", DEFAULT_DB_NAME);
    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("zoo-db").join(file_name),
        None => PathBuf::from(".").join(file_name),
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_path_ends_with_alpha_db() {
        let config = DbConfig::default();
        assert!(config.database_path.ends_with("alpha.db"));
        assert_eq!(config.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert!(!config.create_if_missing);
        assert_eq!(config.locale, "ja");
    }

    #[test]
    fn test_json_file_fills_missing_fields_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"database_path": "/tmp/zoo-test.db", "busy_timeout_ms": 100}}"#).unwrap();

        let config = DbConfig::from_json_file(file.path()).unwrap();
        // 环境变量可能覆写路径，这里只断言未被覆写的字段
        assert_eq!(config.busy_timeout_ms, 100);
        assert!(!config.create_if_missing);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = DbConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_path_fails_validation() {
        let config = DbConfig::with_path("");
        assert!(config.validate().is_err());
        assert!(DbConfig::with_path("alpha.db").validate().is_ok());
    }

    #[test]
    fn test_is_true() {
        assert!(is_true(" Yes "));
        assert!(is_true("1"));
        assert!(!is_true("off"));
    }
}
