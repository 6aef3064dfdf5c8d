//! 需求約束

use good_lp::{constraint, Constraint};
use optiplan_core::{DemandSchedule, PlanConfig};

use crate::context::ConstraintContext;
use crate::variables::PlanVariables;

/// 需求只在每天固定的出貨時刻釋放
///
/// 非出貨時刻強制 `filled_demand[m,t] == 0`；出貨時刻本身不生成約束。
pub fn demand_filled_only_at_filling_hour(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    config: &PlanConfig,
) -> Vec<Constraint> {
    ctx.material_time_indexes
        .iter()
        .filter(|index| !config.is_demand_filling_hour(index.time))
        .map(|index| {
            let filled = vars.filled_demand(index);
            constraint!(filled == 0.0)
        })
        .collect()
}

/// 出貨量不得超過訂購量：`filled_demand[m,t] <= demand.get((m,t), 0)`
///
/// 沒有訂單的 (物料, 時間) 上限為 0——不可出貨從未被訂購的東西。
pub fn filled_demand_loe_than_demand(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    demand: &DemandSchedule,
) -> Vec<Constraint> {
    ctx.material_time_indexes
        .iter()
        .map(|index| {
            let filled = vars.filled_demand(index);
            let booked = demand.quantity(&index.material, index.time);
            constraint!(filled <= booked)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::small_fixture;
    use rstest::rstest;

    #[rstest]
    #[case(8)]
    #[case(0)] // 半夜出貨也只是配置
    #[case(12)]
    fn test_filling_hour_gate_skips_filling_hours(#[case] filling_hour: u32) {
        // 24 小時範圍，每天一個出貨時刻
        let fx = small_fixture(&["A"], &["LINE-1"], &["F1"], 0, 23);
        let config = PlanConfig::default().with_demand_filling_hour(filling_hour);

        let constraints = demand_filled_only_at_filling_hour(&fx.ctx, &fx.vars, &config);
        // 24 個時段中只有出貨時刻本身跳過
        assert_eq!(constraints.len(), 23);
    }

    #[test]
    fn test_booking_ceiling_emitted_for_every_material_time() {
        let fx = small_fixture(&["A", "B"], &["LINE-1"], &["F1"], 0, 5);
        let mut demand = DemandSchedule::new();
        demand.add("A", 2, 5.0);

        let constraints = filled_demand_loe_than_demand(&fx.ctx, &fx.vars, &demand);
        // 未登記的組合上限 0，約束仍然要生成
        assert_eq!(constraints.len(), 2 * 6);
    }
}
