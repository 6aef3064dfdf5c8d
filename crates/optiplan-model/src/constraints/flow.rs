//! 物料流平衡約束
//!
//! 把五族變數綁在一起的核心方程：下一期庫存 = 本期庫存
//! + 採購 + 自產 − 被父物料生產消耗 − 出貨。

use good_lp::{constraint, Constraint, Expression};
use optiplan_core::{
    Bom, MaterialEquipmentFormulaTimeIndex, MaterialTimeIndex, PlanConfig,
};

use crate::context::ConstraintContext;
use crate::variables::PlanVariables;

/// 物料流平衡：對每個 (物料, 時間) 且 `time < tmax` 生成
///
/// ```text
/// inventory[m,t+1] == inventory[m,t] + purchased[m,t]
///                   + batch_size * Σ_{e,f} production[m,e,f,t]
///                   - batch_size * Σ_{parent,f,e} required_quantity(f,parent,m) * production[parent,e,f,t]
///                   - filled_demand[m,t]
/// ```
///
/// 方程連接第 t 期與第 t+1 期，最後一期無後繼、不生成。
/// 消耗項只考慮 BOM 的父物料集合；無關的 (父, 子) 組合比例為 0，
/// 自然不貢獻任何項。
pub fn material_flow_balance(
    ctx: &ConstraintContext,
    vars: &PlanVariables,
    all_equipment: &[String],
    formulas: &[String],
    bom: &Bom,
    config: &PlanConfig,
) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(ctx.material_time_indexes.len());

    for index in &ctx.material_time_indexes {
        if index.time == ctx.tmax {
            continue;
        }

        let material = &index.material;
        let time = index.time;

        // 本期自產（單位數）
        let produced = all_equipment
            .iter()
            .flat_map(|equipment| formulas.iter().map(move |formula| (equipment, formula)))
            .fold(Expression::from(0.0), |acc, (equipment, formula)| {
                acc + vars.production(&MaterialEquipmentFormulaTimeIndex::new(
                    material.clone(),
                    equipment.clone(),
                    formula.clone(),
                    time,
                ))
            })
            * config.batch_size;

        // 本期被父物料生產吃掉的量（單位數）
        let mut consumed = Expression::from(0.0);
        for parent in bom.all_parent_materials() {
            for formula in formulas {
                let proportion = bom.required_quantity(formula, parent, material);
                if proportion == 0.0 {
                    continue;
                }
                for equipment in all_equipment {
                    consumed += proportion
                        * vars.production(&MaterialEquipmentFormulaTimeIndex::new(
                            parent.clone(),
                            equipment.clone(),
                            formula.clone(),
                            time,
                        ));
                }
            }
        }
        let consumed = consumed * config.batch_size;

        let inventory_next = vars.inventory(&MaterialTimeIndex::new(material.clone(), time + 1));
        let inventory_now = vars.inventory(index);
        let purchased = vars.purchased(index);
        let filled = vars.filled_demand(index);

        let balance = inventory_now + purchased + produced - consumed - filled;
        constraints.push(constraint!(inventory_next == balance));
    }

    constraints
}
