//! 採購約束

use good_lp::{constraint, Constraint};
use optiplan_core::{Bom, PlanConfig};

use crate::context::ConstraintContext;
use crate::variables::PlanVariables;

/// 只有外購組件可以採購：廠內生產（父物料集合）的物料強制
/// `purchased[m,t] == 0`，必須用產的、不能用買的
pub fn only_components_can_be_purchased(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    bom: &Bom,
) -> Vec<Constraint> {
    ctx.material_time_indexes
        .iter()
        .filter(|index| bom.produced_in_house(&index.material))
        .map(|index| {
            let purchased = vars.purchased(index);
            constraint!(purchased == 0.0)
        })
        .collect()
}

/// 工時窗口：工廠關閉的時段禁止收貨（與生產的窗口一致）
pub fn no_purchasing_when_factory_closed(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    config: &PlanConfig,
) -> Vec<Constraint> {
    ctx.material_time_indexes
        .iter()
        .filter(|index| config.factory_closed_at(index.time))
        .map(|index| {
            let purchased = vars.purchased(index);
            constraint!(purchased == 0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::small_fixture;
    use optiplan_core::BomRow;

    #[test]
    fn test_in_house_materials_cannot_be_purchased() {
        let fx = small_fixture(&["BREAD", "FLOUR", "WHEAT"], &["LINE-1"], &["F1"], 0, 3);
        let bom = Bom::from_rows(&[
            BomRow::new("F1", "BREAD", "FLOUR", 1.0),
            BomRow::new("F1", "FLOUR", "WHEAT", 1.0),
        ]);

        let constraints = only_components_can_be_purchased(&fx.ctx, &fx.vars, &bom);
        // BREAD 與 FLOUR 是父物料（各 4 個時段）；WHEAT 可採購
        assert_eq!(constraints.len(), 2 * 4);
    }

    #[test]
    fn test_closed_hours_forbid_purchasing() {
        let fx = small_fixture(&["A"], &["LINE-1"], &["F1"], 0, 23);
        let config = PlanConfig::default();

        let constraints = no_purchasing_when_factory_closed(&fx.ctx, &fx.vars, &config);
        // 0-7 與 21-23 共 11 個關廠小時
        assert_eq!(constraints.len(), 11);
    }
}
