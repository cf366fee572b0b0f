// ==========================================
// 动物园 - API层错误类型
// ==========================================
// 职责: 在操作边界把仓储层错误包装为单一的 SystemError
// 消息: 按失败步骤查消息目录 (locales/*.yml)，默认日语
// ==========================================

use crate::i18n::t;
use crate::repository::error::RepositoryError;
use std::fmt;
use thiserror::Error;

/// 错误种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 初始化失败，句柄不可用
    Init,
    /// 无法建立会话
    Connect,
    /// 主表读取失败或判别符未知
    Catalog,
    /// 数据表读取失败
    Query,
    /// 插入/更新/删除失败
    Write,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Init => "INIT_FAILURE",
            ErrorKind::Connect => "CONNECT_FAILURE",
            ErrorKind::Catalog => "CATALOG_FAILURE",
            ErrorKind::Query => "QUERY_FAILURE",
            ErrorKind::Write => "WRITE_FAILURE",
        };
        f.write_str(s)
    }
}

/// 失败步骤（决定错误种类与消息键）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedStep {
    Init,
    CageMaster,
    AnimalMaster,
    RibbonMaster,
    CageAnimalRead,
    CageAnimalWrite,
    RibbonAnimalRead,
    RibbonAnimalWrite,
    RibbonAnimalDelete,
    Report,
}

impl FailedStep {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FailedStep::Init => ErrorKind::Init,
            FailedStep::CageMaster | FailedStep::AnimalMaster => ErrorKind::Catalog,
            FailedStep::RibbonMaster
            | FailedStep::CageAnimalRead
            | FailedStep::RibbonAnimalRead
            | FailedStep::Report => ErrorKind::Query,
            FailedStep::CageAnimalWrite
            | FailedStep::RibbonAnimalWrite
            | FailedStep::RibbonAnimalDelete => ErrorKind::Write,
        }
    }

    /// 消息目录键
    pub fn message_key(&self) -> &'static str {
        match self {
            FailedStep::Init => "error.init",
            FailedStep::CageMaster => "error.cage_master",
            FailedStep::AnimalMaster => "error.animal_master",
            FailedStep::RibbonMaster => "error.ribbon_master",
            FailedStep::CageAnimalRead => "error.cage_animal_read",
            FailedStep::CageAnimalWrite => "error.cage_animal_write",
            FailedStep::RibbonAnimalRead => "error.ribbon_animal_read",
            FailedStep::RibbonAnimalWrite => "error.ribbon_animal_write",
            FailedStep::RibbonAnimalDelete => "error.ribbon_animal_delete",
            FailedStep::Report => "error.report",
        }
    }
}

/// 系统错误：可读消息 + 原因链
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SystemError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: RepositoryError,
}

impl SystemError {
    /// 按失败步骤包装
    ///
    /// 会话建立阶段的错误一律归为 Connect，与操作无关。
    pub fn wrap(step: FailedStep, source: RepositoryError) -> Self {
        let (kind, key) = if source.is_connection_error() && step != FailedStep::Init {
            (ErrorKind::Connect, "error.connect")
        } else {
            (step.kind(), step.message_key())
        };
        Self {
            kind,
            message: t(key),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 底层原因
    pub fn cause(&self) -> &RepositoryError {
        &self.source
    }
}

/// Result 类型别名
pub type SystemResult<T> = Result<T, SystemError>;

/// 操作边界的错误包装
pub(crate) trait WrapFailure<T> {
    fn or_fail(self, step: FailedStep) -> SystemResult<T>;
}

impl<T> WrapFailure<T> for Result<T, RepositoryError> {
    fn or_fail(self, step: FailedStep) -> SystemResult<T> {
        self.map_err(|e| SystemError::wrap(step, e))
    }
}
