// ==========================================
// 动物园 - 动物领域模型
// ==========================================
// 对齐: m_animal 表 (cd, name, type)
// 对齐: t_cage_animal 表 (id, cage_cd, animal_cd, weight, name)
// ==========================================

use crate::domain::types::Species;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 饲养中动物的主键 (t_cage_animal.id)
pub type AnimalId = i64;

// ==========================================
// AnimalType - 动物种类 (主数据)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalType {
    pub code: i32,        // 动物代码 (m_animal.cd)
    pub name: String,     // 动物名称
    pub species: Species, // 物种句柄
}

// ==========================================
// Animal - 饲养中的动物
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub cage_code: i32,           // 所在檻 (t_cage_animal.cage_cd)
    pub species_code: i32,        // 动物代码 (t_cage_animal.animal_cd)
    pub weight: i32,              // 体重 (不做范围校验，原样透传)
    pub species: Option<Species>, // 具体物种 (工厂无法解析时为 None)
}

impl Animal {
    pub fn new(id: AnimalId, cage_code: i32, species_code: i32, weight: i32) -> Self {
        Self {
            id,
            cage_code,
            species_code,
            weight,
            species: None,
        }
    }
}

// ==========================================
// Trait: AnimalFactory
// ==========================================
// 用途: 由 (id, 檻代码, 动物代码, 体重) 构造具体动物
pub trait AnimalFactory: Send + Sync {
    fn create_animal(&self, id: AnimalId, cage_code: i32, species_code: i32, weight: i32) -> Animal;
}

/// 不解析物种的工厂
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainAnimalFactory;

impl AnimalFactory for PlainAnimalFactory {
    fn create_animal(
        &self,
        id: AnimalId,
        cage_code: i32,
        species_code: i32,
        weight: i32,
    ) -> Animal {
        Animal::new(id, cage_code, species_code, weight)
    }
}

/// 基于动物主数据解析物种的工厂
#[derive(Debug, Default, Clone)]
pub struct CatalogAnimalFactory {
    species_by_code: HashMap<i32, Species>,
}

impl CatalogAnimalFactory {
    /// 从动物种类列表构造（通常来自 get_animal_type_list）
    pub fn from_catalog(types: &[AnimalType]) -> Self {
        Self {
            species_by_code: types.iter().map(|t| (t.code, t.species)).collect(),
        }
    }

    pub fn species_of(&self, species_code: i32) -> Option<Species> {
        self.species_by_code.get(&species_code).copied()
    }
}

impl AnimalFactory for CatalogAnimalFactory {
    fn create_animal(
        &self,
        id: AnimalId,
        cage_code: i32,
        species_code: i32,
        weight: i32,
    ) -> Animal {
        Animal {
            species: self.species_of(species_code),
            ..Animal::new(id, cage_code, species_code, weight)
        }
    }
}
