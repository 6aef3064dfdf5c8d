//! 模型編排器
//!
//! 依固定順序把索引空間、變數、五個約束族與目標函數組裝成
//! 一個完整的最大化問題，再交給求解器邊界求解。
//! 狀態機以所有權鏈表達：`ManufacturingOptimizer` 建構出
//! `BuiltModel`，`BuiltModel::solve` 消耗自己產出 `SolvedPlan`，
//! 同一個模型不可能被求解兩次。

use good_lp::{Constraint, Expression, ProblemVariables};
use optiplan_core::{
    build_equipment_formula_time_indexes, build_equipment_time_indexes,
    build_material_equipment_formula_time_indexes, Bom, CapacityMap, Costs, DemandSchedule,
    EquipmentFormulaTimeIndex, EquipmentTimeIndex, MaterialEquipmentFormulaTimeIndex,
    MaterialTimeIndex, PlanConfig, PlanError, Result, SellingPrices, SolverConfig, StockLevels,
};

use crate::constraints::{demand, flow, inventory, production, purchasing};
use crate::context::ConstraintContext;
use crate::objective::build_objective;
use crate::results::PlanResults;
use crate::solver::solve_and_extract;
use crate::variables::PlanVariables;

/// 建模所需的全部業務資料
#[derive(Debug, Clone, Default)]
pub struct ModelInputs {
    pub stock: StockLevels,
    pub capacity: CapacityMap,
    pub demand: DemandSchedule,
    pub bom: Bom,
    pub costs: Costs,
    pub selling_prices: SellingPrices,
}

/// 生產排程最優化器
///
/// 持有問題的結構性資料（物料/設備/配方清單、時間範圍、
/// 行為配置、求解器配置）；業務資料在 [`build_model`] 時才傳入，
/// 同一個最優化器可以對不同的資料重複建模。
///
/// [`build_model`]: ManufacturingOptimizer::build_model
#[derive(Debug, Clone)]
pub struct ManufacturingOptimizer {
    ctx: ConstraintContext,
    all_equipment: Vec<String>,
    formulas: Vec<String>,
    meft_indexes: Vec<MaterialEquipmentFormulaTimeIndex>,
    eft_indexes: Vec<EquipmentFormulaTimeIndex>,
    equipment_time_indexes: Vec<EquipmentTimeIndex>,
    config: PlanConfig,
    solver: SolverConfig,
}

impl ManufacturingOptimizer {
    /// 創建新的最優化器並預先展開全部索引空間
    pub fn new(
        materials: Vec<String>,
        all_equipment: Vec<String>,
        formulas: Vec<String>,
        t0: u32,
        tmax: u32,
        config: PlanConfig,
        solver: SolverConfig,
    ) -> Result<Self> {
        if materials.is_empty() {
            return Err(PlanError::MissingInputData("物料清單為空".to_string()));
        }
        if all_equipment.is_empty() {
            return Err(PlanError::MissingInputData("設備清單為空".to_string()));
        }
        if formulas.is_empty() {
            return Err(PlanError::MissingInputData("配方清單為空".to_string()));
        }

        let ctx = ConstraintContext::new(materials, t0, tmax)?;
        let meft_indexes = build_material_equipment_formula_time_indexes(
            &ctx.materials,
            &all_equipment,
            &formulas,
            t0,
            tmax,
        );
        let eft_indexes = build_equipment_formula_time_indexes(&all_equipment, &formulas, t0, tmax);
        let equipment_time_indexes = build_equipment_time_indexes(&all_equipment, t0, tmax);

        Ok(Self {
            ctx,
            all_equipment,
            formulas,
            meft_indexes,
            eft_indexes,
            equipment_time_indexes,
            config,
            solver,
        })
    }

    /// 組裝完整的最優化模型
    ///
    /// 先驗證輸入，再建變數，然後依固定順序生成五個約束族，
    /// 最後組裝目標函數。
    pub fn build_model(&self, inputs: &ModelInputs) -> Result<BuiltModel> {
        tracing::info!(
            "開始建模：物料 {} 個，設備 {} 台，配方 {} 個，時間範圍 [{}, {}]",
            self.ctx.materials.len(),
            self.all_equipment.len(),
            self.formulas.len(),
            self.ctx.t0,
            self.ctx.tmax
        );

        // Step 1: 輸入驗證（每個物料都要有期初庫存）
        tracing::debug!("Step 1: 輸入驗證");
        inputs.stock.validate_initial_stock(&self.ctx.materials)?;

        // Step 2: 創建決策變數
        tracing::debug!("Step 2: 創建決策變數");
        let mut problem = ProblemVariables::new();
        let vars = PlanVariables::create(
            &mut problem,
            &self.ctx.material_time_indexes,
            &self.meft_indexes,
            &self.equipment_time_indexes,
        );
        tracing::debug!("變數數量: {}", vars.len());

        // Step 3: 生成約束
        tracing::debug!("Step 3: 生成約束");
        let mut constraints: Vec<Constraint> = Vec::new();

        // 庫存族
        constraints.extend(inventory::initial_inventory_constraints(
            &self.ctx,
            &vars,
            &inputs.stock,
        )?);
        constraints.extend(inventory::safety_stock_constraints(
            &self.ctx,
            &vars,
            &inputs.stock,
        ));

        // 生產族
        constraints.extend(production::no_production_at_t0(
            &self.ctx,
            &vars,
            &self.meft_indexes,
        ));
        constraints.extend(production::no_production_when_factory_closed(
            &vars,
            &self.meft_indexes,
            &self.config,
        ));
        constraints.extend(production::components_cannot_be_produced(
            &vars,
            &self.meft_indexes,
            &inputs.bom,
        ));
        constraints.extend(production::production_does_not_exceed_capacity(
            &self.ctx,
            &vars,
            &self.eft_indexes,
            &inputs.capacity,
            &self.config,
        ));
        constraints.extend(production::equipment_status_linkage(
            &self.ctx,
            &vars,
            &self.equipment_time_indexes,
            &self.formulas,
            &self.config,
        ));
        constraints.extend(production::max_continuous_run_limit(
            &self.ctx,
            &vars,
            &self.equipment_time_indexes,
            &self.config,
        ));

        // 物料流平衡
        constraints.extend(flow::material_flow_balance(
            &self.ctx,
            &vars,
            &self.all_equipment,
            &self.formulas,
            &inputs.bom,
            &self.config,
        ));

        // 需求族
        constraints.extend(demand::demand_filled_only_at_filling_hour(
            &self.ctx,
            &vars,
            &self.config,
        ));
        constraints.extend(demand::filled_demand_loe_than_demand(
            &self.ctx,
            &vars,
            &inputs.demand,
        ));

        // 採購族
        constraints.extend(purchasing::only_components_can_be_purchased(
            &self.ctx,
            &vars,
            &inputs.bom,
        ));
        constraints.extend(purchasing::no_purchasing_when_factory_closed(
            &self.ctx,
            &vars,
            &self.config,
        ));
        tracing::debug!("約束數量: {}", constraints.len());

        // Step 4: 組裝目標函數
        tracing::debug!("Step 4: 組裝目標函數");
        let objective = build_objective(
            &self.ctx,
            &vars,
            &self.all_equipment,
            &self.formulas,
            &inputs.costs,
            &inputs.selling_prices,
            &self.config,
        );

        tracing::info!("建模完成：{} 個變數，{} 條約束", vars.len(), constraints.len());

        Ok(BuiltModel {
            problem,
            vars,
            constraints,
            objective,
            material_time_indexes: self.ctx.material_time_indexes.clone(),
            meft_indexes: self.meft_indexes.clone(),
            equipment_time_indexes: self.equipment_time_indexes.clone(),
            solver: self.solver.clone(),
        })
    }
}

/// 已組裝完成、尚未求解的模型
///
/// 變數表來自求解器、不可逐項列印，Debug 輸出只呈現模型規模。
pub struct BuiltModel {
    problem: ProblemVariables,
    vars: PlanVariables,
    constraints: Vec<Constraint>,
    objective: Expression,
    material_time_indexes: Vec<MaterialTimeIndex>,
    meft_indexes: Vec<MaterialEquipmentFormulaTimeIndex>,
    equipment_time_indexes: Vec<EquipmentTimeIndex>,
    solver: SolverConfig,
}

impl std::fmt::Debug for BuiltModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltModel")
            .field("num_variables", &self.vars.len())
            .field("num_constraints", &self.constraints.len())
            .field("solver", &self.solver.name)
            .finish_non_exhaustive()
    }
}

impl BuiltModel {
    /// 約束數量
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// 變數數量
    pub fn num_variables(&self) -> usize {
        self.vars.len()
    }

    /// 求解模型
    ///
    /// 消耗自己：求解後模型內部狀態已交給求解器，不可重用。
    pub fn solve(self) -> Result<SolvedPlan> {
        tracing::info!(
            "開始求解：{} 個變數，{} 條約束，求解器 {:?}",
            self.vars.len(),
            self.constraints.len(),
            self.solver.name
        );
        let start_time = std::time::Instant::now();

        let values = solve_and_extract(
            self.problem,
            self.objective,
            self.constraints,
            &self.vars,
            &self.material_time_indexes,
            &self.meft_indexes,
            &self.equipment_time_indexes,
            &self.solver,
        )?;

        tracing::info!(
            "求解完成，耗時 {:?}，目標函數值 {:.4}",
            start_time.elapsed(),
            values.objective_value
        );

        let results = PlanResults::from_solved_values(
            &values,
            &self.material_time_indexes,
            &self.meft_indexes,
            &self.equipment_time_indexes,
        );

        Ok(SolvedPlan { results })
    }
}

/// 求解完成的排程計劃
#[derive(Debug, Clone)]
pub struct SolvedPlan {
    results: PlanResults,
}

impl SolvedPlan {
    /// 排程結果表格
    pub fn results(&self) -> &PlanResults {
        &self.results
    }

    /// 最優目標函數值
    pub fn objective_value(&self) -> f64 {
        self.results.objective_value
    }

    /// 取出結果，消耗計劃本身
    pub fn into_results(self) -> PlanResults {
        self.results
    }
}
