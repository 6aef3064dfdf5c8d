//! # OptiPlan Model
//!
//! 多期生產/採購/庫存排程的 LP/MIP 建模引擎。
//!
//! 把物料、設備與配方清單展開成笛卡兒索引空間，在其上定義
//! 五族決策變數（生產批數、庫存、採購、出貨、設備狀態），
//! 生成庫存、生產、物料流平衡、需求與採購五個約束族，
//! 組裝「收入 − 庫存成本 − 採購成本 − 生產成本」的最大化
//! 目標函數，最後交給可配置的求解器後端。
//!
//! ## 使用方式
//!
//! ```no_run
//! use optiplan_core::{PlanConfig, SolverConfig};
//! use optiplan_model::{ManufacturingOptimizer, ModelInputs};
//!
//! # fn main() -> optiplan_core::Result<()> {
//! let mut inputs = ModelInputs::default();
//! inputs.stock.set("BREAD", 100.0, 0.0);
//!
//! let optimizer = ManufacturingOptimizer::new(
//!     vec!["BREAD".to_string()],
//!     vec!["LINE-1".to_string()],
//!     vec!["F1".to_string()],
//!     0,
//!     47,
//!     PlanConfig::default(),
//!     SolverConfig::default(),
//! )?;
//!
//! let plan = optimizer.build_model(&inputs)?.solve()?;
//! println!("目標函數值: {}", plan.objective_value());
//! # Ok(())
//! # }
//! ```

pub mod constraints;
pub mod context;
pub mod model;
pub mod objective;
pub mod results;
pub mod solver;
pub mod variables;

#[cfg(test)]
mod testing;

pub use context::ConstraintContext;
pub use model::{BuiltModel, ManufacturingOptimizer, ModelInputs, SolvedPlan};
pub use objective::build_objective;
pub use results::{EquipmentStatusRecord, PlanResults, ProductionRecord, QuantityRecord};
pub use solver::SolvedValues;
pub use variables::PlanVariables;
