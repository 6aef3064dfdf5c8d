//! 庫存約束

use good_lp::{constraint, Constraint};
use optiplan_core::{MaterialTimeIndex, Result, StockLevels};

use crate::context::ConstraintContext;
use crate::variables::PlanVariables;

/// 期初庫存：`inventory[m, t0] == initial_inventory[m]`
///
/// 物料清單裡的每個物料都必須有期初庫存，缺漏視為配置錯誤、
/// 在建模前快速失敗。
pub fn initial_inventory_constraints(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    stock: &StockLevels,
) -> Result<Vec<Constraint>> {
    let mut constraints = Vec::with_capacity(ctx.material_t0_indexes.len());
    for index in &ctx.material_t0_indexes {
        let initial = stock.initial_stock(&index.material)?;
        let inventory = vars.inventory(index);
        constraints.push(constraint!(inventory == initial));
    }
    Ok(constraints)
}

/// 期末安全庫存：`inventory[m, tmax] >= safety_stock[m]`
///
/// 未配置安全庫存的物料預設為 0（約束退化為非負，與變數域一致）。
pub fn safety_stock_constraints(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    stock: &StockLevels,
) -> Vec<Constraint> {
    ctx.materials
        .iter()
        .map(|material| {
            let index = MaterialTimeIndex::new(material.clone(), ctx.tmax);
            let inventory = vars.inventory(&index);
            let safety = stock.safety_stock(material);
            constraint!(inventory >= safety)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::small_fixture;
    use optiplan_core::PlanError;

    #[test]
    fn test_initial_inventory_one_constraint_per_material() {
        let fx = small_fixture(&["A", "B"], &["LINE-1"], &["F1"], 0, 5);
        let mut stock = StockLevels::default();
        stock.set("A", 10.0, 0.0);
        stock.set("B", 20.0, 0.0);

        let constraints =
            initial_inventory_constraints(&fx.ctx, &fx.vars, &stock).unwrap();
        assert_eq!(constraints.len(), 2);
    }

    #[test]
    fn test_initial_inventory_missing_material_fails_fast() {
        let fx = small_fixture(&["A", "B"], &["LINE-1"], &["F1"], 0, 5);
        let mut stock = StockLevels::default();
        stock.set("A", 10.0, 0.0);

        let err = initial_inventory_constraints(&fx.ctx, &fx.vars, &stock).unwrap_err();
        assert!(matches!(err, PlanError::MissingInitialInventory(m) if m == "B"));
    }

    #[test]
    fn test_safety_stock_one_constraint_per_material() {
        let fx = small_fixture(&["A", "B", "C"], &["LINE-1"], &["F1"], 0, 5);
        // 安全庫存缺漏預設 0，不報錯
        let stock = StockLevels::default();

        let constraints = safety_stock_constraints(&fx.ctx, &fx.vars, &stock);
        assert_eq!(constraints.len(), 3);
    }
}
