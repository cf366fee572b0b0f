// ==========================================
// 动物园 - 领域类型定义
// ==========================================
// 判别符 (discriminator) 以短标签形式存储于主表 type 列
// 读取时通过 from_tag 解析，未知标签由仓储层拒绝
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 檻类型 (Cage Type)
// ==========================================
// 对齐: m_cage.type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CageType {
    Land,    // 陆地檻
    Aerial,  // 空中檻 (鸟舍)
    Aquatic, // 水中檻 (水槽)
}

impl CageType {
    /// 全部檻类型（注册表顺序）
    pub const ALL: [CageType; 3] = [CageType::Land, CageType::Aerial, CageType::Aquatic];

    /// 檻类型注册表：判别符 → 檻类型
    ///
    /// # 返回
    /// - Some(CageType): 已注册的标签
    /// - None: 未知标签
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "land" => Some(CageType::Land),
            "aerial" => Some(CageType::Aerial),
            "aquatic" => Some(CageType::Aquatic),
            _ => None,
        }
    }

    /// 存储于数据库的标签
    pub fn to_tag(&self) -> &'static str {
        match self {
            CageType::Land => "land",
            CageType::Aerial => "aerial",
            CageType::Aquatic => "aquatic",
        }
    }
}

impl fmt::Display for CageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_tag())
    }
}

// ==========================================
// 物种句柄 (Species Handle)
// ==========================================
// 对齐: m_animal.type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Lion,
    Tiger,
    Elephant,
    Giraffe,
    Zebra,
    Eagle,
    Owl,
    Parrot,
    Penguin,
    Dolphin,
    Seal,
}

impl Species {
    /// 物种句柄注册表：判别符 → 物种
    pub fn from_tag(tag: &str) -> Option<Self> {
        let species = match tag.trim() {
            "lion" => Species::Lion,
            "tiger" => Species::Tiger,
            "elephant" => Species::Elephant,
            "giraffe" => Species::Giraffe,
            "zebra" => Species::Zebra,
            "eagle" => Species::Eagle,
            "owl" => Species::Owl,
            "parrot" => Species::Parrot,
            "penguin" => Species::Penguin,
            "dolphin" => Species::Dolphin,
            "seal" => Species::Seal,
            _ => return None,
        };
        Some(species)
    }

    pub fn to_tag(&self) -> &'static str {
        match self {
            Species::Lion => "lion",
            Species::Tiger => "tiger",
            Species::Elephant => "elephant",
            Species::Giraffe => "giraffe",
            Species::Zebra => "zebra",
            Species::Eagle => "eagle",
            Species::Owl => "owl",
            Species::Parrot => "parrot",
            Species::Penguin => "penguin",
            Species::Dolphin => "dolphin",
            Species::Seal => "seal",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_tag())
    }
}
