//! 目標函數組裝
//!
//! 最大化整個時間範圍的淨收入：
//! 出貨收入 − 庫存持有成本 − 採購成本 − 生產營運成本。

use good_lp::Expression;
use optiplan_core::{
    Costs, MaterialEquipmentFormulaTimeIndex, PlanConfig, SellingPrices,
};

use crate::context::ConstraintContext;
use crate::variables::PlanVariables;

/// 組裝目標函數表達式
///
/// ```text
/// Σ_{m,t} [ selling_price(m) * filled_demand[m,t]
///         - inventory_cost(m) * inventory[m,t]
///         - purchase_cost(m)  * purchased[m,t]
///         - batch_size * Σ_{e,f} production_cost(e,f) * production[m,e,f,t] ]
/// ```
///
/// 所有價格/成本查詢在鍵不存在時回傳 0.0：缺漏的業務資料
/// 只是讓該項貢獻為零，永遠不會阻斷目標函數建構。
pub fn build_objective(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    all_equipment: &[String],
    formulas: &[String],
    costs: &Costs,
    selling_prices: &SellingPrices,
    config: &PlanConfig,
) -> Expression {
    let mut objective = Expression::from(0.0);

    for index in &ctx.material_time_indexes {
        let material = &index.material;

        objective += selling_prices.price(material) * vars.filled_demand(index);
        objective -= costs.inventory_cost(material) * vars.inventory(index);
        objective -= costs.purchase_cost(material) * vars.purchased(index);

        let mut production_cost = Expression::from(0.0);
        for equipment in all_equipment {
            for formula in formulas {
                let unit_cost = costs.production_cost(equipment, formula);
                if unit_cost == 0.0 {
                    continue;
                }
                production_cost += unit_cost
                    * vars.production(&MaterialEquipmentFormulaTimeIndex::new(
                        material.clone(),
                        equipment.clone(),
                        formula.clone(),
                        index.time,
                    ));
            }
        }
        objective -= production_cost * config.batch_size;
    }

    objective
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::small_fixture;
    use std::collections::HashMap;

    #[test]
    fn test_objective_with_full_cost_data() {
        let fx = small_fixture(&["BREAD", "WHEAT"], &["LINE-1"], &["F1"], 0, 3);

        let mut inventory = HashMap::new();
        inventory.insert("WHEAT".to_string(), 0.1);
        let mut purchase = HashMap::new();
        purchase.insert("WHEAT".to_string(), 2.0);
        let mut production = HashMap::new();
        production.insert(("LINE-1".to_string(), "F1".to_string()), 5.0);
        let costs = Costs::new(inventory, purchase, production);

        let mut prices = HashMap::new();
        prices.insert("BREAD".to_string(), 30.0);
        let selling_prices = SellingPrices::new(prices);

        // 收入、三種成本齊備時表達式能完整組裝；
        // 數值正確性由端到端求解測試驗證
        let _objective = build_objective(
            &fx.ctx,
            &fx.vars,
            &fx.equipment,
            &fx.formulas,
            &costs,
            &selling_prices,
            &PlanConfig::default(),
        );
    }

    #[test]
    fn test_objective_with_no_cost_data_builds() {
        // 完全沒有成本/售價資料：建構不報錯，所有項貢獻 0
        let fx = small_fixture(&["A"], &["LINE-1"], &["F1"], 0, 3);

        let _objective = build_objective(
            &fx.ctx,
            &fx.vars,
            &fx.equipment,
            &fx.formulas,
            &Costs::default(),
            &SellingPrices::default(),
            &PlanConfig::default(),
        );
    }
}
