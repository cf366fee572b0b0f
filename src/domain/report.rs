// ==========================================
// 动物园 - 饲养一览报表行
// ==========================================
// 来源: t_cage_animal JOIN m_cage LEFT JOIN t_ribbon_animal
// ==========================================

use crate::domain::animal::AnimalId;
use serde::Serialize;
use std::fmt;

/// 报表中的一行（一只饲养中的动物）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalInfo {
    pub cage_name: String,
    pub animal_id: AnimalId,
    pub animal_name: Option<String>, // t_cage_animal.name 可能为 NULL
    pub weight: i32,
    pub ribbon_name: Option<String>, // 未佩戴缎带时为 None
}

/// 以制表符分隔输出
///
/// 檻名 \t ID \t 动物名 \t 体重 \t [缎带名]
/// 动物名为 NULL 时输出空字段；缎带名为空时只保留末尾的制表符。
impl fmt::Display for AnimalInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t",
            self.cage_name,
            self.animal_id,
            self.animal_name.as_deref().unwrap_or(""),
            self.weight
        )?;
        match self.ribbon_name.as_deref() {
            Some(ribbon) if !ribbon.is_empty() => f.write_str(ribbon),
            _ => Ok(()),
        }
    }
}
