//! # OptiPlan Core
//!
//! 生產計劃優化的核心資料模型：索引空間、BOM 表、成本結構與配置

pub mod bom;
pub mod capacity;
pub mod config;
pub mod costs;
pub mod demand;
pub mod index;
pub mod input;
pub mod stock;

// Re-export 主要類型
pub use bom::{Bom, BomRow};
pub use capacity::CapacityMap;
pub use config::{PlanConfig, SolverConfig, SolverName};
pub use costs::{Costs, SellingPrices};
pub use demand::{hour_for_daily_period, horizon_for_last_demand_hour, DemandSchedule};
pub use index::{
    build_equipment_formula_time_indexes, build_equipment_time_indexes,
    build_material_equipment_formula_time_indexes, build_material_time_indexes,
    EquipmentFormulaTimeIndex, EquipmentTimeIndex, MaterialEquipmentFormulaTimeIndex,
    MaterialTimeIndex,
};
pub use input::{
    build_capacity_map, build_costs, build_demand_schedule, build_equipment_list,
    build_formula_list, build_material_list, build_selling_prices, build_stock_levels,
    ComponentRow, DemandRow, FinishedGoodRow, InventoryRow, ProductionLineRow,
};
pub use stock::StockLevels;

/// 計劃優化錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("缺少物料的期初庫存: {0}")]
    MissingInitialInventory(String),

    #[error("無效的時間範圍: t0={t0}, tmax={tmax}")]
    InvalidHorizon { t0: u32, tmax: u32 },

    #[error("缺少必要的輸入資料: {0}")]
    MissingInputData(String),

    #[error("模型無可行解")]
    Infeasible,

    #[error("目標函數無界")]
    Unbounded,

    #[error("求解器不可用: {0}")]
    SolverUnavailable(String),

    #[error("求解失敗: {0}")]
    SolverFailure(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
