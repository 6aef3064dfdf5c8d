//! 單元測試共用的小型模型夾具

use good_lp::ProblemVariables;
use optiplan_core::{
    build_equipment_formula_time_indexes, build_equipment_time_indexes,
    build_material_equipment_formula_time_indexes, EquipmentFormulaTimeIndex,
    EquipmentTimeIndex, MaterialEquipmentFormulaTimeIndex,
};

use crate::context::ConstraintContext;
use crate::variables::PlanVariables;

/// 小型測試夾具：上下文、三個複合索引空間與完整變數域
pub struct Fixture {
    pub ctx: ConstraintContext,
    pub equipment: Vec<String>,
    pub formulas: Vec<String>,
    pub meft: Vec<MaterialEquipmentFormulaTimeIndex>,
    pub eft: Vec<EquipmentFormulaTimeIndex>,
    pub et: Vec<EquipmentTimeIndex>,
    pub vars: PlanVariables,
    pub problem: ProblemVariables,
}

/// 建一個可直接餵給約束函數的小模型
pub fn small_fixture(
    materials: &[&str],
    equipment: &[&str],
    formulas: &[&str],
    t0: u32,
    tmax: u32,
) -> Fixture {
    let materials: Vec<String> = materials.iter().map(|s| s.to_string()).collect();
    let equipment: Vec<String> = equipment.iter().map(|s| s.to_string()).collect();
    let formulas: Vec<String> = formulas.iter().map(|s| s.to_string()).collect();

    let ctx = ConstraintContext::new(materials.clone(), t0, tmax)
        .expect("夾具的時間範圍必須合法");
    let meft =
        build_material_equipment_formula_time_indexes(&materials, &equipment, &formulas, t0, tmax);
    let eft = build_equipment_formula_time_indexes(&equipment, &formulas, t0, tmax);
    let et = build_equipment_time_indexes(&equipment, t0, tmax);

    let mut problem = ProblemVariables::new();
    let vars = PlanVariables::create(&mut problem, &ctx.material_time_indexes, &meft, &et);

    Fixture {
        ctx,
        equipment,
        formulas,
        meft,
        eft,
        et,
        vars,
        problem,
    }
}
