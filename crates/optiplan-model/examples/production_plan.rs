//! 端到端示範：麵包廠的兩天生產/採購排程
//!
//! ```bash
//! cargo run --example production_plan
//! ```

use optiplan_core::{
    build_capacity_map, build_costs, build_demand_schedule, build_equipment_list,
    build_formula_list, build_material_list, build_selling_prices, build_stock_levels,
    horizon_for_last_demand_hour, hour_for_daily_period, Bom, BomRow, ComponentRow, DemandRow,
    FinishedGoodRow, InventoryRow, PlanConfig, ProductionLineRow, SolverConfig,
};
use optiplan_model::{ManufacturingOptimizer, ModelInputs};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 主檔資料：兩種原料、一種製成品、一條產線
    let components = vec![
        ComponentRow::new("WHEAT", 0.05, 2.0),
        ComponentRow::new("WATER", 0.0, 0.1),
    ];
    let finished_goods = vec![FinishedGoodRow::new("BREAD", 30.0)];
    let inventories = vec![
        InventoryRow::new("WHEAT", 200.0, 0.0),
        InventoryRow::new("WATER", 500.0, 0.0),
        InventoryRow::new("BREAD", 20.0, 0.0),
    ];
    let lines = vec![ProductionLineRow::new("LINE-1", "F-BREAD", 120.0, 0.5)];
    let bom_rows = vec![
        BomRow::new("F-BREAD", "BREAD", "WHEAT", 0.6),
        BomRow::new("F-BREAD", "BREAD", "WATER", 0.4),
    ];

    // 訂單：第 1 天 30 個、第 2 天 80 個
    let demands = vec![
        DemandRow::new("BREAD", 1, 30.0),
        DemandRow::new("BREAD", 2, 80.0),
    ];

    let config = PlanConfig::default();
    let last_filling_hour = demands
        .iter()
        .map(|row| hour_for_daily_period(row.period, config.demand_filling_hour))
        .max()
        .unwrap_or(config.demand_filling_hour);
    let tmax = horizon_for_last_demand_hour(last_filling_hour);

    let inputs = ModelInputs {
        stock: build_stock_levels(&inventories),
        capacity: build_capacity_map(&lines),
        demand: build_demand_schedule(&demands, config.demand_filling_hour),
        bom: Bom::from_rows(&bom_rows),
        costs: build_costs(&components, &lines),
        selling_prices: build_selling_prices(&finished_goods),
    };

    let optimizer = ManufacturingOptimizer::new(
        build_material_list(&components, &finished_goods),
        build_equipment_list(&lines),
        build_formula_list(&bom_rows),
        0,
        tmax,
        config,
        SolverConfig::default(),
    )?;

    let plan = optimizer.build_model(&inputs)?.solve()?;
    let results = plan.results();

    println!("目標函數值: {:.2}", plan.objective_value());

    println!("\n生產排程（批數）:");
    println!("{:<10} {:<10} {:<10} {:>6} {:>10}", "物料", "設備", "配方", "時間", "批數");
    for record in &results.production {
        println!(
            "{:<10} {:<10} {:<10} {:>6} {:>10.2}",
            record.material, record.equipment, record.formula, record.time, record.batches
        );
    }

    println!("\n採購排程:");
    println!("{:<10} {:>6} {:>10}", "物料", "時間", "數量");
    for record in &results.purchased {
        println!("{:<10} {:>6} {:>10.2}", record.material, record.time, record.quantity);
    }

    println!("\n出貨排程:");
    println!("{:<10} {:>6} {:>10}", "物料", "時間", "數量");
    for record in &results.filled_demand {
        println!("{:<10} {:>6} {:>10.2}", record.material, record.time, record.quantity);
    }

    println!("\n設備開機狀態:");
    println!("{:<10} {:>6} {:>8}", "設備", "時間", "狀態");
    for record in &results.equipment_status {
        println!("{:<10} {:>6} {:>8.0}", record.equipment, record.time, record.status);
    }

    Ok(())
}
