//! 求解器邊界
//!
//! 把「選擇求解器」這件事收斂到一個 dispatch 點：
//! 預設使用內嵌的 microlp，不需要任何外部執行檔；
//! 啟用 `external-solvers` feature 後可改走 CBC / GLPK 命令列後端。

use std::collections::HashMap;

use good_lp::{
    Constraint, Expression, ProblemVariables, ResolutionError, Solution, SolverModel,
};
use optiplan_core::{
    EquipmentTimeIndex, MaterialEquipmentFormulaTimeIndex, MaterialTimeIndex, PlanError,
    Result, SolverConfig, SolverName,
};

use crate::variables::PlanVariables;

/// 求解完成後的變數值快照
///
/// 解本身綁在求解器的內部型別上，這裡把五族變數的值
/// 全部抄出來，後續的結果萃取不再依賴求解器。
#[derive(Debug, Clone)]
pub struct SolvedValues {
    pub production: HashMap<MaterialEquipmentFormulaTimeIndex, f64>,
    pub inventory: HashMap<MaterialTimeIndex, f64>,
    pub purchased: HashMap<MaterialTimeIndex, f64>,
    pub filled_demand: HashMap<MaterialTimeIndex, f64>,
    pub equipment_status: HashMap<EquipmentTimeIndex, f64>,
    /// 最優目標函數值
    pub objective_value: f64,
}

/// 以配置指定的求解器求解，並抄出全部變數值
#[allow(clippy::too_many_arguments)]
pub(crate) fn solve_and_extract(
    problem: ProblemVariables,
    objective: Expression,
    constraints: Vec<Constraint>,
    vars: &PlanVariables,
    material_time_indexes: &[MaterialTimeIndex],
    meft_indexes: &[MaterialEquipmentFormulaTimeIndex],
    equipment_time_indexes: &[EquipmentTimeIndex],
    solver: &SolverConfig,
) -> Result<SolvedValues> {
    match solver.name {
        SolverName::Microlp => {
            let model = constraints.into_iter().fold(
                problem.maximise(objective.clone()).using(good_lp::microlp),
                |model, constraint| model.with(constraint),
            );
            let solution = model.solve().map_err(map_resolution_error)?;
            Ok(extract(
                &solution,
                &objective,
                vars,
                material_time_indexes,
                meft_indexes,
                equipment_time_indexes,
            ))
        }
        #[cfg(feature = "external-solvers")]
        SolverName::Cbc => {
            let mut backend = lp_solvers::solvers::CbcSolver::new();
            if let Some(path) = &solver.executable_path {
                backend = backend.command_name(path.display().to_string());
            }
            let model = constraints.into_iter().fold(
                problem
                    .maximise(objective.clone())
                    .using(good_lp::solvers::lp_solvers::LpSolver(backend)),
                |model, constraint| model.with(constraint),
            );
            let solution = model.solve().map_err(map_resolution_error)?;
            Ok(extract(
                &solution,
                &objective,
                vars,
                material_time_indexes,
                meft_indexes,
                equipment_time_indexes,
            ))
        }
        #[cfg(feature = "external-solvers")]
        SolverName::Glpk => {
            let mut backend = lp_solvers::solvers::GlpkSolver::new();
            if let Some(path) = &solver.executable_path {
                backend = backend.command_name(path.display().to_string());
            }
            let model = constraints.into_iter().fold(
                problem
                    .maximise(objective.clone())
                    .using(good_lp::solvers::lp_solvers::LpSolver(backend)),
                |model, constraint| model.with(constraint),
            );
            let solution = model.solve().map_err(map_resolution_error)?;
            Ok(extract(
                &solution,
                &objective,
                vars,
                material_time_indexes,
                meft_indexes,
                equipment_time_indexes,
            ))
        }
        #[cfg(not(feature = "external-solvers"))]
        other => Err(PlanError::SolverUnavailable(format!(
            "{other:?} 需要啟用 external-solvers feature"
        ))),
    }
}

fn map_resolution_error(error: ResolutionError) -> PlanError {
    match error {
        ResolutionError::Infeasible => PlanError::Infeasible,
        ResolutionError::Unbounded => PlanError::Unbounded,
        other => PlanError::SolverFailure(other.to_string()),
    }
}

fn extract<S: Solution>(
    solution: &S,
    objective: &Expression,
    vars: &PlanVariables,
    material_time_indexes: &[MaterialTimeIndex],
    meft_indexes: &[MaterialEquipmentFormulaTimeIndex],
    equipment_time_indexes: &[EquipmentTimeIndex],
) -> SolvedValues {
    let mut production = HashMap::with_capacity(meft_indexes.len());
    for index in meft_indexes {
        production.insert(index.clone(), solution.value(vars.production(index)));
    }

    let mut inventory = HashMap::with_capacity(material_time_indexes.len());
    let mut purchased = HashMap::with_capacity(material_time_indexes.len());
    let mut filled_demand = HashMap::with_capacity(material_time_indexes.len());
    for index in material_time_indexes {
        inventory.insert(index.clone(), solution.value(vars.inventory(index)));
        purchased.insert(index.clone(), solution.value(vars.purchased(index)));
        filled_demand.insert(index.clone(), solution.value(vars.filled_demand(index)));
    }

    let mut equipment_status = HashMap::with_capacity(equipment_time_indexes.len());
    for index in equipment_time_indexes {
        equipment_status.insert(index.clone(), solution.value(vars.equipment_status(index)));
    }

    SolvedValues {
        production,
        inventory,
        purchased,
        filled_demand,
        equipment_status,
        objective_value: objective.eval_with(solution),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::small_fixture;
    use good_lp::constraint;
    use optiplan_core::MaterialTimeIndex;

    #[test]
    fn test_microlp_solves_tiny_model() {
        let fx = small_fixture(&["A"], &["LINE-1"], &["F1"], 0, 1);
        let index = MaterialTimeIndex::new("A", 0);

        // max filled_demand[A,0]，上限 5
        let filled = fx.vars.filled_demand(&index);
        let objective = Expression::from(filled);
        let constraints = vec![constraint!(filled <= 5.0)];

        let values = solve_and_extract(
            fx.problem,
            objective,
            constraints,
            &fx.vars,
            &fx.ctx.material_time_indexes,
            &fx.meft,
            &fx.et,
            &SolverConfig::default(),
        )
        .unwrap();

        assert!((values.filled_demand[&index] - 5.0).abs() < 1e-6);
        assert!((values.objective_value - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_infeasible_model_maps_to_infeasible_error() {
        let fx = small_fixture(&["A"], &["LINE-1"], &["F1"], 0, 1);
        let index = MaterialTimeIndex::new("A", 0);

        let filled = fx.vars.filled_demand(&index);
        let objective = Expression::from(filled);
        // 互相矛盾的上下界
        let constraints = vec![constraint!(filled <= 5.0), constraint!(filled >= 10.0)];

        let err = solve_and_extract(
            fx.problem,
            objective,
            constraints,
            &fx.vars,
            &fx.ctx.material_time_indexes,
            &fx.meft,
            &fx.et,
            &SolverConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, PlanError::Infeasible));
    }

    #[test]
    fn test_unbounded_objective_maps_to_unbounded_error() {
        let fx = small_fixture(&["A"], &["LINE-1"], &["F1"], 0, 1);
        let index = MaterialTimeIndex::new("A", 0);

        // 沒有任何上界：目標無界
        let objective = Expression::from(fx.vars.filled_demand(&index));

        let err = solve_and_extract(
            fx.problem,
            objective,
            Vec::new(),
            &fx.vars,
            &fx.ctx.material_time_indexes,
            &fx.meft,
            &fx.et,
            &SolverConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, PlanError::Unbounded));
    }
}
