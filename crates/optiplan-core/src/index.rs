//! 索引空間模型
//!
//! 模型中所有變數與約束都建立在四個笛卡兒積索引空間之上：
//! 物料×時間、物料×設備×配方×時間、設備×配方×時間、設備×時間。
//! 索引空間在建構時不做任何稀疏過濾（例如「工廠關閉時段」），
//! 過濾只發生在約束規則內，以確保變數域與約束集保持對齊。

use serde::{Deserialize, Serialize};

/// 物料×時間索引
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaterialTimeIndex {
    /// 物料ID
    pub material: String,
    /// 時間（小時，自 t0 起算）
    pub time: u32,
}

impl MaterialTimeIndex {
    /// 創建新的物料×時間索引
    pub fn new(material: impl Into<String>, time: u32) -> Self {
        Self {
            material: material.into(),
            time,
        }
    }
}

/// 物料×設備×配方×時間索引
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaterialEquipmentFormulaTimeIndex {
    /// 物料ID
    pub material: String,
    /// 設備ID
    pub equipment: String,
    /// 配方ID
    pub formula: String,
    /// 時間（小時）
    pub time: u32,
}

impl MaterialEquipmentFormulaTimeIndex {
    /// 創建新的物料×設備×配方×時間索引
    pub fn new(
        material: impl Into<String>,
        equipment: impl Into<String>,
        formula: impl Into<String>,
        time: u32,
    ) -> Self {
        Self {
            material: material.into(),
            equipment: equipment.into(),
            formula: formula.into(),
            time,
        }
    }
}

/// 設備×配方×時間索引
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EquipmentFormulaTimeIndex {
    /// 設備ID
    pub equipment: String,
    /// 配方ID
    pub formula: String,
    /// 時間（小時）
    pub time: u32,
}

impl EquipmentFormulaTimeIndex {
    /// 創建新的設備×配方×時間索引
    pub fn new(equipment: impl Into<String>, formula: impl Into<String>, time: u32) -> Self {
        Self {
            equipment: equipment.into(),
            formula: formula.into(),
            time,
        }
    }
}

/// 設備×時間索引
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EquipmentTimeIndex {
    /// 設備ID
    pub equipment: String,
    /// 時間（小時）
    pub time: u32,
}

impl EquipmentTimeIndex {
    /// 創建新的設備×時間索引
    pub fn new(equipment: impl Into<String>, time: u32) -> Self {
        Self {
            equipment: equipment.into(),
            time,
        }
    }
}

/// 生成物料×時間索引空間
///
/// 時間範圍 [t0, tmax] 兩端皆包含；迭代順序為物料在外、時間在內，
/// 此順序決定結果表的行序，與模型正確性無關。
pub fn build_material_time_indexes(
    materials: &[String],
    t0: u32,
    tmax: u32,
) -> Vec<MaterialTimeIndex> {
    materials
        .iter()
        .flat_map(|material| {
            (t0..=tmax).map(move |time| MaterialTimeIndex::new(material.clone(), time))
        })
        .collect()
}

/// 生成物料×設備×配方×時間索引空間
///
/// 迭代順序：物料 → 設備 → 配方 → 時間（最內層）。
pub fn build_material_equipment_formula_time_indexes(
    materials: &[String],
    all_equipment: &[String],
    formulas: &[String],
    t0: u32,
    tmax: u32,
) -> Vec<MaterialEquipmentFormulaTimeIndex> {
    let mut indexes =
        Vec::with_capacity(materials.len() * all_equipment.len() * formulas.len() * horizon_len(t0, tmax));
    for material in materials {
        for equipment in all_equipment {
            for formula in formulas {
                for time in t0..=tmax {
                    indexes.push(MaterialEquipmentFormulaTimeIndex::new(
                        material.clone(),
                        equipment.clone(),
                        formula.clone(),
                        time,
                    ));
                }
            }
        }
    }
    indexes
}

/// 生成設備×配方×時間索引空間
pub fn build_equipment_formula_time_indexes(
    all_equipment: &[String],
    formulas: &[String],
    t0: u32,
    tmax: u32,
) -> Vec<EquipmentFormulaTimeIndex> {
    let mut indexes =
        Vec::with_capacity(all_equipment.len() * formulas.len() * horizon_len(t0, tmax));
    for equipment in all_equipment {
        for formula in formulas {
            for time in t0..=tmax {
                indexes.push(EquipmentFormulaTimeIndex::new(
                    equipment.clone(),
                    formula.clone(),
                    time,
                ));
            }
        }
    }
    indexes
}

/// 生成設備×時間索引空間
pub fn build_equipment_time_indexes(
    all_equipment: &[String],
    t0: u32,
    tmax: u32,
) -> Vec<EquipmentTimeIndex> {
    all_equipment
        .iter()
        .flat_map(|equipment| {
            (t0..=tmax).map(move |time| EquipmentTimeIndex::new(equipment.clone(), time))
        })
        .collect()
}

fn horizon_len(t0: u32, tmax: u32) -> usize {
    (tmax.saturating_sub(t0) as usize) + 1
}
