//! 成本與售價結構
//!
//! 業務資料常有缺漏：所有查詢在鍵不存在時一律回傳 0.0，
//! 缺少成本資料永遠不會阻斷模型建構。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 成本結構：三組映射
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Costs {
    /// 物料 → 單位庫存持有成本（每小時）
    inventory: HashMap<String, f64>,

    /// 物料 → 單位採購成本
    purchase: HashMap<String, f64>,

    /// (設備, 配方) → 單位生產營運成本
    production: HashMap<(String, String), f64>,
}

impl Costs {
    /// 創建新的成本結構
    pub fn new(
        inventory: HashMap<String, f64>,
        purchase: HashMap<String, f64>,
        production: HashMap<(String, String), f64>,
    ) -> Self {
        Self {
            inventory,
            purchase,
            production,
        }
    }

    /// 單位庫存持有成本，未配置時為 0.0
    pub fn inventory_cost(&self, material: &str) -> f64 {
        self.inventory.get(material).copied().unwrap_or(0.0)
    }

    /// 單位採購成本，未配置時為 0.0
    pub fn purchase_cost(&self, material: &str) -> f64 {
        self.purchase.get(material).copied().unwrap_or(0.0)
    }

    /// (設備, 配方) 的單位生產成本，未配置時為 0.0
    pub fn production_cost(&self, equipment: &str, formula: &str) -> f64 {
        self.production
            .get(&(equipment.to_string(), formula.to_string()))
            .copied()
            .unwrap_or(0.0)
    }
}

/// 製成品售價表
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellingPrices {
    prices: HashMap<String, f64>,
}

impl SellingPrices {
    /// 從映射創建售價表
    pub fn new(prices: HashMap<String, f64>) -> Self {
        Self { prices }
    }

    /// 物料售價，未配置時為 0.0（不可售物料自然貢獻零收入）
    pub fn price(&self, material: &str) -> f64 {
        self.prices.get(material).copied().unwrap_or(0.0)
    }
}
