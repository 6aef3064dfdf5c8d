//! 關聯式輸入資料列
//!
//! 外部資料攝取端（試算表/資料庫讀取）負責把原始資料整理成這些
//! 型別化資料列；本 crate 只消費資料列並轉換為建模用的查詢結構，
//! 不碰任何檔案格式。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bom::BomRow;
use crate::capacity::CapacityMap;
use crate::costs::{Costs, SellingPrices};
use crate::demand::{hour_for_daily_period, DemandSchedule};
use crate::stock::StockLevels;

/// 組件主檔列：外購原料的成本資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRow {
    /// 組件物料ID
    pub component: String,
    /// 單位庫存持有成本
    pub inventory_cost: f64,
    /// 單位採購成本
    pub purchase_cost: f64,
}

impl ComponentRow {
    /// 創建新的組件主檔列
    pub fn new(component: impl Into<String>, inventory_cost: f64, purchase_cost: f64) -> Self {
        Self {
            component: component.into(),
            inventory_cost,
            purchase_cost,
        }
    }
}

/// 製成品主檔列：售價資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedGoodRow {
    /// 製成品物料ID
    pub manufactured_good: String,
    /// 單位售價
    pub selling_price: f64,
}

impl FinishedGoodRow {
    /// 創建新的製成品主檔列
    pub fn new(manufactured_good: impl Into<String>, selling_price: f64) -> Self {
        Self {
            manufactured_good: manufactured_good.into(),
            selling_price,
        }
    }
}

/// 庫存列：期初庫存與安全庫存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    /// 物料ID
    pub material: String,
    /// 期初庫存
    pub initial_stock: f64,
    /// 期末安全庫存
    pub safety_stock: f64,
}

impl InventoryRow {
    /// 創建新的庫存列
    pub fn new(material: impl Into<String>, initial_stock: f64, safety_stock: f64) -> Self {
        Self {
            material: material.into(),
            initial_stock,
            safety_stock,
        }
    }
}

/// 產線列：設備能跑哪個配方、產能與營運成本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLineRow {
    /// 設備ID
    pub equipment: String,
    /// 配方ID
    pub formula: String,
    /// 最大產能（單位數/小時）
    pub max_production_capacity: f64,
    /// 單位生產營運成本
    pub operation_cost: f64,
}

impl ProductionLineRow {
    /// 創建新的產線列
    pub fn new(
        equipment: impl Into<String>,
        formula: impl Into<String>,
        max_production_capacity: f64,
        operation_cost: f64,
    ) -> Self {
        Self {
            equipment: equipment.into(),
            formula: formula.into(),
            max_production_capacity,
            operation_cost,
        }
    }
}

/// 需求列：製成品在第幾天被訂購多少
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRow {
    /// 製成品物料ID
    pub finished_good: String,
    /// 日期（1 起算的天數）
    pub period: u32,
    /// 訂購量
    pub amount: f64,
}

impl DemandRow {
    /// 創建新的需求列
    pub fn new(finished_good: impl Into<String>, period: u32, amount: f64) -> Self {
        Self {
            finished_good: finished_good.into(),
            period,
            amount,
        }
    }
}

/// 由組件與產線主檔組裝成本結構
pub fn build_costs(components: &[ComponentRow], production_lines: &[ProductionLineRow]) -> Costs {
    let inventory: HashMap<String, f64> = components
        .iter()
        .map(|row| (row.component.clone(), row.inventory_cost))
        .collect();
    let purchase: HashMap<String, f64> = components
        .iter()
        .map(|row| (row.component.clone(), row.purchase_cost))
        .collect();
    let production: HashMap<(String, String), f64> = production_lines
        .iter()
        .map(|row| ((row.equipment.clone(), row.formula.clone()), row.operation_cost))
        .collect();

    Costs::new(inventory, purchase, production)
}

/// 由製成品主檔組裝售價表
pub fn build_selling_prices(finished_goods: &[FinishedGoodRow]) -> SellingPrices {
    SellingPrices::new(
        finished_goods
            .iter()
            .map(|row| (row.manufactured_good.clone(), row.selling_price))
            .collect(),
    )
}

/// 由庫存列組裝庫存水位
pub fn build_stock_levels(rows: &[InventoryRow]) -> StockLevels {
    let mut stock = StockLevels::default();
    for row in rows {
        stock.set(row.material.clone(), row.initial_stock, row.safety_stock);
    }
    stock
}

/// 由產線列組裝產能表
pub fn build_capacity_map(production_lines: &[ProductionLineRow]) -> CapacityMap {
    let mut capacity = CapacityMap::default();
    for row in production_lines {
        capacity.set(
            row.equipment.clone(),
            row.formula.clone(),
            row.max_production_capacity,
        );
    }
    capacity
}

/// 由需求列組裝需求計劃，日需求換算到每天的出貨時刻
pub fn build_demand_schedule(rows: &[DemandRow], filling_hour: u32) -> DemandSchedule {
    let mut demand = DemandSchedule::new();
    for row in rows {
        demand.add(
            row.finished_good.clone(),
            hour_for_daily_period(row.period, filling_hour),
            row.amount,
        );
    }
    demand
}

/// 物料清單 = 組件 ++ 製成品（保序去重）
pub fn build_material_list(
    components: &[ComponentRow],
    finished_goods: &[FinishedGoodRow],
) -> Vec<String> {
    let ids = components
        .iter()
        .map(|row| row.component.clone())
        .chain(finished_goods.iter().map(|row| row.manufactured_good.clone()));
    unique_preserving_order(ids)
}

/// 設備清單（保序去重）
pub fn build_equipment_list(production_lines: &[ProductionLineRow]) -> Vec<String> {
    unique_preserving_order(production_lines.iter().map(|row| row.equipment.clone()))
}

/// 配方清單（保序去重）
pub fn build_formula_list(bom_rows: &[BomRow]) -> Vec<String> {
    unique_preserving_order(bom_rows.iter().map(|row| row.formula.clone()))
}

fn unique_preserving_order(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            unique.push(item);
        }
    }
    unique
}
