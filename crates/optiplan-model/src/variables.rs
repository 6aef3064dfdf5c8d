//! 決策變數模型
//!
//! 五族變數，各自定義在對應的索引空間上：
//! - `production`（批數，連續非負）
//! - `inventory_quantity`、`purchased_quantity`、`filled_demand`（連續非負）
//! - `equipment_status`（0/1 整數：該小時設備是否有生產）

use std::collections::HashMap;

use good_lp::{variable, ProblemVariables, Variable};
use optiplan_core::{
    EquipmentTimeIndex, MaterialEquipmentFormulaTimeIndex, MaterialTimeIndex,
};

/// 模型的全部決策變數，以索引元組查詢
///
/// 查詢用的索引必須來自 [`create`] 時傳入的同一組索引空間；
/// 約束建構器與變數共用索引生成器，不會自行編造索引。
/// 越界查詢是呼叫端的程式錯誤而非資料問題，accessor 直接 panic
/// 而不是把不可恢復的內部不變量包進 `Result`。
///
/// [`create`]: PlanVariables::create
#[derive(Debug, Clone)]
pub struct PlanVariables {
    production: HashMap<MaterialEquipmentFormulaTimeIndex, Variable>,
    inventory: HashMap<MaterialTimeIndex, Variable>,
    purchased: HashMap<MaterialTimeIndex, Variable>,
    filled_demand: HashMap<MaterialTimeIndex, Variable>,
    equipment_status: HashMap<EquipmentTimeIndex, Variable>,
}

impl PlanVariables {
    /// 在給定的索引空間上創建全部變數
    ///
    /// 變數域就是完整的索引空間，與約束共用同一組索引，
    /// 不在此處做任何稀疏過濾。
    pub fn create(
        problem: &mut ProblemVariables,
        material_time_indexes: &[MaterialTimeIndex],
        material_equipment_formula_time_indexes: &[MaterialEquipmentFormulaTimeIndex],
        equipment_time_indexes: &[EquipmentTimeIndex],
    ) -> Self {
        let mut production = HashMap::with_capacity(material_equipment_formula_time_indexes.len());
        for index in material_equipment_formula_time_indexes {
            let var = problem.add(variable().min(0.0).name(format!(
                "production[{},{},{},{}]",
                index.material, index.equipment, index.formula, index.time
            )));
            production.insert(index.clone(), var);
        }

        let mut inventory = HashMap::with_capacity(material_time_indexes.len());
        let mut purchased = HashMap::with_capacity(material_time_indexes.len());
        let mut filled_demand = HashMap::with_capacity(material_time_indexes.len());
        for index in material_time_indexes {
            inventory.insert(
                index.clone(),
                problem.add(variable().min(0.0).name(format!(
                    "inventory_quantity[{},{}]",
                    index.material, index.time
                ))),
            );
            purchased.insert(
                index.clone(),
                problem.add(variable().min(0.0).name(format!(
                    "purchased_quantity[{},{}]",
                    index.material, index.time
                ))),
            );
            filled_demand.insert(
                index.clone(),
                problem.add(variable().min(0.0).name(format!(
                    "filled_demand[{},{}]",
                    index.material, index.time
                ))),
            );
        }

        let mut equipment_status = HashMap::with_capacity(equipment_time_indexes.len());
        for index in equipment_time_indexes {
            let var = problem.add(variable().integer().min(0.0).max(1.0).name(format!(
                "equipment_status[{},{}]",
                index.equipment, index.time
            )));
            equipment_status.insert(index.clone(), var);
        }

        Self {
            production,
            inventory,
            purchased,
            filled_demand,
            equipment_status,
        }
    }

    /// 生產變數（批數）
    pub fn production(&self, index: &MaterialEquipmentFormulaTimeIndex) -> Variable {
        self.production
            .get(index)
            .copied()
            .expect("生產變數索引不在變數域中")
    }

    /// 庫存變數
    pub fn inventory(&self, index: &MaterialTimeIndex) -> Variable {
        self.inventory
            .get(index)
            .copied()
            .expect("庫存變數索引不在變數域中")
    }

    /// 採購變數
    pub fn purchased(&self, index: &MaterialTimeIndex) -> Variable {
        self.purchased
            .get(index)
            .copied()
            .expect("採購變數索引不在變數域中")
    }

    /// 已滿足需求變數
    pub fn filled_demand(&self, index: &MaterialTimeIndex) -> Variable {
        self.filled_demand
            .get(index)
            .copied()
            .expect("需求變數索引不在變數域中")
    }

    /// 設備狀態變數（0/1）
    pub fn equipment_status(&self, index: &EquipmentTimeIndex) -> Variable {
        self.equipment_status
            .get(index)
            .copied()
            .expect("設備狀態變數索引不在變數域中")
    }

    /// 變數總數
    pub fn len(&self) -> usize {
        self.production.len()
            + self.inventory.len()
            + self.purchased.len()
            + self.filled_demand.len()
            + self.equipment_status.len()
    }

    /// 是否沒有任何變數
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
