// ==========================================
// 动物园 - 檻领域模型
// ==========================================
// 对齐: m_cage 表 (cd, name, type)
// ==========================================

use crate::domain::types::CageType;
use serde::{Deserialize, Serialize};

/// 檻
///
/// 由檻主数据的一行构造，构造后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cage {
    pub code: i32,          // 檻代码 (m_cage.cd)
    pub name: String,       // 檻名称
    pub variant: CageType,  // 檻类型 (由判别符决定)
}

impl Cage {
    /// 按类型构造檻（代码由主数据行赋值）
    pub fn new(variant: CageType, name: impl Into<String>) -> Self {
        Self {
            code: 0,
            name: name.into(),
            variant,
        }
    }

    /// 赋值檻代码
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }
}
