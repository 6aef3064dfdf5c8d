//! 排程結果萃取
//!
//! 把求解後的變數值快照整理成可序列化的關聯式表格，
//! 逐表過濾掉數值上為零的列。

use serde::Serialize;

use crate::solver::SolvedValues;
use optiplan_core::{
    EquipmentTimeIndex, MaterialEquipmentFormulaTimeIndex, MaterialTimeIndex,
};

/// 低於此幅度的變數值視為零，不輸出
const ZERO_TOLERANCE: f64 = 1e-9;

/// 一筆生產排程：某物料在某 (設備, 配方, 時間) 上的批數
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionRecord {
    pub material: String,
    pub equipment: String,
    pub formula: String,
    pub time: u32,
    /// 批數（單位數 = 批數 × batch_size）
    pub batches: f64,
}

/// 一筆 (物料, 時間) 上的數量：庫存、採購、出貨共用
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityRecord {
    pub material: String,
    pub time: u32,
    pub quantity: f64,
}

/// 一筆設備開機狀態
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentStatusRecord {
    pub equipment: String,
    pub time: u32,
    /// 0 或 1（求解器回傳值四捨五入前的原始值）
    pub status: f64,
}

/// 完整的排程結果：五張表格加上最優目標函數值
#[derive(Debug, Clone, Serialize)]
pub struct PlanResults {
    pub production: Vec<ProductionRecord>,
    pub inventory: Vec<QuantityRecord>,
    pub purchased: Vec<QuantityRecord>,
    pub filled_demand: Vec<QuantityRecord>,
    pub equipment_status: Vec<EquipmentStatusRecord>,
    pub objective_value: f64,
}

impl PlanResults {
    /// 依索引空間的順序走訪解值，組出確定性順序的表格
    pub(crate) fn from_solved_values(
        values: &SolvedValues,
        material_time_indexes: &[MaterialTimeIndex],
        meft_indexes: &[MaterialEquipmentFormulaTimeIndex],
        equipment_time_indexes: &[EquipmentTimeIndex],
    ) -> Self {
        let production = meft_indexes
            .iter()
            .filter_map(|index| {
                let batches = values.production[index];
                nonzero(batches).map(|batches| ProductionRecord {
                    material: index.material.clone(),
                    equipment: index.equipment.clone(),
                    formula: index.formula.clone(),
                    time: index.time,
                    batches,
                })
            })
            .collect();

        let quantity_table = |table: &std::collections::HashMap<MaterialTimeIndex, f64>| {
            material_time_indexes
                .iter()
                .filter_map(|index| {
                    nonzero(table[index]).map(|quantity| QuantityRecord {
                        material: index.material.clone(),
                        time: index.time,
                        quantity,
                    })
                })
                .collect::<Vec<_>>()
        };

        let equipment_status = equipment_time_indexes
            .iter()
            .filter_map(|index| {
                nonzero(values.equipment_status[index]).map(|status| EquipmentStatusRecord {
                    equipment: index.equipment.clone(),
                    time: index.time,
                    status,
                })
            })
            .collect();

        Self {
            production,
            inventory: quantity_table(&values.inventory),
            purchased: quantity_table(&values.purchased),
            filled_demand: quantity_table(&values.filled_demand),
            equipment_status,
            objective_value: values.objective_value,
        }
    }
}

fn nonzero(value: f64) -> Option<f64> {
    if value.abs() < ZERO_TOLERANCE {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optiplan_core::{
        build_equipment_time_indexes, build_material_equipment_formula_time_indexes,
        build_material_time_indexes,
    };
    use std::collections::HashMap;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_zero_rows_are_dropped_and_order_is_deterministic() {
        let materials = strings(&["A"]);
        let equipment = strings(&["LINE-1"]);
        let formulas = strings(&["F1"]);

        let mt = build_material_time_indexes(&materials, 0, 2);
        let meft =
            build_material_equipment_formula_time_indexes(&materials, &equipment, &formulas, 0, 2);
        let et = build_equipment_time_indexes(&equipment, 0, 2);

        let mut production = HashMap::new();
        let mut inventory = HashMap::new();
        let mut purchased = HashMap::new();
        let mut filled_demand = HashMap::new();
        let mut equipment_status = HashMap::new();
        for index in &meft {
            production.insert(index.clone(), if index.time == 1 { 2.0 } else { 0.0 });
        }
        for index in &mt {
            inventory.insert(index.clone(), 10.0);
            purchased.insert(index.clone(), 1e-12); // 數值雜訊
            filled_demand.insert(index.clone(), 0.0);
        }
        for index in &et {
            equipment_status.insert(index.clone(), if index.time == 1 { 1.0 } else { 0.0 });
        }

        let values = SolvedValues {
            production,
            inventory,
            purchased,
            filled_demand,
            equipment_status,
            objective_value: 42.0,
        };

        let results = PlanResults::from_solved_values(&values, &mt, &meft, &et);

        assert_eq!(results.production.len(), 1);
        assert_eq!(results.production[0].time, 1);
        assert_eq!(results.production[0].batches, 2.0);

        // 庫存三期都非零，且依時間遞增排列
        assert_eq!(results.inventory.len(), 3);
        assert!(results.inventory.windows(2).all(|w| w[0].time < w[1].time));

        // 雜訊與真零都被丟棄
        assert!(results.purchased.is_empty());
        assert!(results.filled_demand.is_empty());

        assert_eq!(results.equipment_status.len(), 1);
        assert_eq!(results.objective_value, 42.0);

        // 結果表是對外交付格式，必須可序列化
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["production"][0]["batches"], 2.0);
        assert_eq!(json["objective_value"], 42.0);
    }
}
