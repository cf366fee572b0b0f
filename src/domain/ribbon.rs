// ==========================================
// 动物园 - 缎带领域模型
// ==========================================
// 对齐: m_ribbon 表 (name)
// 对齐: t_ribbon_animal 表 (name, animal_id)
// ==========================================
// 约束: 同一缎带名同时至多佩戴于一只动物
// ==========================================

use crate::domain::animal::Animal;
use serde::Serialize;

/// 缎带名 → 佩戴中动物 的映射
///
/// 保持插入顺序，键唯一；对调用方只读。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RibbonMap {
    entries: Vec<(String, Animal)>,
}

impl RibbonMap {
    /// 插入或替换
    ///
    /// 已存在的键保持原位置，仅替换动物。
    pub(crate) fn insert(&mut self, ribbon_name: String, animal: Animal) {
        match self.entries.iter_mut().find(|(name, _)| *name == ribbon_name) {
            Some(entry) => entry.1 = animal,
            None => self.entries.push((ribbon_name, animal)),
        }
    }

    pub fn get(&self, ribbon_name: &str) -> Option<&Animal> {
        self.entries
            .iter()
            .find(|(name, _)| name == ribbon_name)
            .map(|(_, animal)| animal)
    }

    pub fn contains_key(&self, ribbon_name: &str) -> bool {
        self.get(ribbon_name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序遍历 (缎带名, 动物)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Animal)> {
        self.entries.iter().map(|(name, animal)| (name.as_str(), animal))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}
