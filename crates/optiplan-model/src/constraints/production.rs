//! 生產約束

use good_lp::{constraint, Constraint, Expression};
use optiplan_core::{
    Bom, CapacityMap, EquipmentFormulaTimeIndex, EquipmentTimeIndex,
    MaterialEquipmentFormulaTimeIndex, PlanConfig,
};

use crate::context::ConstraintContext;
use crate::variables::PlanVariables;

/// t0 邊界條件：第一期什麼都還沒發生，禁止任何生產
pub fn no_production_at_t0(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    meft_indexes: &[MaterialEquipmentFormulaTimeIndex],
) -> Vec<Constraint> {
    meft_indexes
        .iter()
        .filter(|index| index.time == ctx.t0)
        .map(|index| {
            let production = vars.production(index);
            constraint!(production == 0.0)
        })
        .collect()
}

/// 工時窗口：工廠關閉的時段禁止生產
///
/// 窗口內的時段不生成約束（跳過而非以零滿足），
/// 差別在模型大小而非語義。
pub fn no_production_when_factory_closed(
    vars: &PlanVariables,
    meft_indexes: &[MaterialEquipmentFormulaTimeIndex],
    config: &PlanConfig,
) -> Vec<Constraint> {
    meft_indexes
        .iter()
        .filter(|index| config.factory_closed_at(index.time))
        .map(|index| {
            let production = vars.production(index);
            constraint!(production == 0.0)
        })
        .collect()
}

/// 純外購物料（BOM 中只作為子物料出現）不可生產，只能採購
pub fn components_cannot_be_produced(
    vars: &PlanVariables,
    meft_indexes: &[MaterialEquipmentFormulaTimeIndex],
    bom: &Bom,
) -> Vec<Constraint> {
    meft_indexes
        .iter()
        .filter(|index| bom.externally_procured(&index.material))
        .map(|index| {
            let production = vars.production(index);
            constraint!(production == 0.0)
        })
        .collect()
}

/// 產能上限：每個 (設備, 配方, 時間) 的總產量（單位數）不得超過配置產能
///
/// 批數 × batch_size = 單位數；未配置的 (設備, 配方) 組合產能為 0，
/// 該組合上什麼都不能生產。
pub fn production_does_not_exceed_capacity(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    eft_indexes: &[EquipmentFormulaTimeIndex],
    max_capacity: &CapacityMap,
    config: &PlanConfig,
) -> Vec<Constraint> {
    eft_indexes
        .iter()
        .map(|index| {
            let produced_units = ctx
                .materials
                .iter()
                .fold(Expression::from(0.0), |acc, material| {
                    acc + vars.production(&MaterialEquipmentFormulaTimeIndex::new(
                        material.clone(),
                        index.equipment.clone(),
                        index.formula.clone(),
                        index.time,
                    ))
                })
                * config.batch_size;
            let capacity = max_capacity.max_capacity(&index.equipment, &index.formula);
            constraint!(produced_units <= capacity)
        })
        .collect()
}

/// 設備狀態連結（雙邊 big-M 線性化）
///
/// `status[e,t] <= Σ production[*,e,*,t]` 且
/// `Σ production[*,e,*,t] <= status[e,t] * BIG_M`。
/// 兩條合起來強制：有任何生產時 status 恰為 1，否則為 0。
/// BIG_M 必須大於任何可行時段總產量，否則上界會錯誤地束緊。
pub fn equipment_status_linkage(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    equipment_time_indexes: &[EquipmentTimeIndex],
    formulas: &[String],
    config: &PlanConfig,
) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(equipment_time_indexes.len() * 2);
    for index in equipment_time_indexes {
        let total_production = ctx
            .materials
            .iter()
            .flat_map(|material| {
                formulas.iter().map(move |formula| (material, formula))
            })
            .fold(Expression::from(0.0), |acc, (material, formula)| {
                acc + vars.production(&MaterialEquipmentFormulaTimeIndex::new(
                    material.clone(),
                    index.equipment.clone(),
                    formula.clone(),
                    index.time,
                ))
            });
        let status = vars.equipment_status(index);

        constraints.push(constraint!(status <= total_production.clone()));
        constraints.push(constraint!(total_production <= config.big_m * status));
    }
    constraints
}

/// 連續運轉上限：任何 `max_continuous_run + 1` 小時的窗口內
/// 至少要有一個停機時段
///
/// 只對完整落在時間範圍內的窗口生成約束
/// （`t + max_continuous_run < tmax`），範圍尾端刻意不約束。
pub fn max_continuous_run_limit(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    equipment_time_indexes: &[EquipmentTimeIndex],
    config: &PlanConfig,
) -> Vec<Constraint> {
    equipment_time_indexes
        .iter()
        .filter(|index| index.time + config.max_continuous_run < ctx.tmax)
        .map(|index| {
            let window_total = (index.time..=index.time + config.max_continuous_run)
                .fold(Expression::from(0.0), |acc, time| {
                    acc + vars.equipment_status(&EquipmentTimeIndex::new(
                        index.equipment.clone(),
                        time,
                    ))
                });
            let limit = f64::from(config.max_continuous_run);
            constraint!(window_total <= limit)
        })
        .collect()
}
