//! 庫存水位模型

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// 期初庫存與安全庫存
///
/// 期初庫存是必要輸入：物料清單裡的每個物料都必須有明確的起始存量，
/// 缺漏視為配置錯誤並在模型建構前報錯。安全庫存缺漏則預設為 0。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockLevels {
    /// 物料 → 期初庫存
    initial: HashMap<String, f64>,

    /// 物料 → 期末安全庫存
    safety: HashMap<String, f64>,
}

impl StockLevels {
    /// 從兩組映射創建庫存水位
    pub fn new(initial: HashMap<String, f64>, safety: HashMap<String, f64>) -> Self {
        Self { initial, safety }
    }

    /// 登記單一物料的庫存水位
    pub fn set(&mut self, material: impl Into<String>, initial_stock: f64, safety_stock: f64) {
        let material = material.into();
        self.initial.insert(material.clone(), initial_stock);
        self.safety.insert(material, safety_stock);
    }

    /// 期初庫存；缺漏為配置錯誤，錯誤訊息指名物料
    pub fn initial_stock(&self, material: &str) -> Result<f64> {
        self.initial
            .get(material)
            .copied()
            .ok_or_else(|| PlanError::MissingInitialInventory(material.to_string()))
    }

    /// 期末安全庫存，未配置時為 0.0
    pub fn safety_stock(&self, material: &str) -> f64 {
        self.safety.get(material).copied().unwrap_or(0.0)
    }

    /// 驗證所有物料都有期初庫存（建模前快速失敗）
    pub fn validate_initial_stock(&self, materials: &[String]) -> Result<()> {
        for material in materials {
            self.initial_stock(material)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_lookups() {
        let mut stock = StockLevels::default();
        stock.set("BREAD", 100.0, 10.0);

        assert_eq!(stock.initial_stock("BREAD").unwrap(), 100.0);
        assert_eq!(stock.safety_stock("BREAD"), 10.0);
    }

    #[test]
    fn test_missing_initial_stock_is_an_error() {
        let stock = StockLevels::default();

        // 期初庫存缺漏必須快速失敗，並指名缺漏的物料
        let err = stock.initial_stock("BREAD").unwrap_err();
        assert!(matches!(err, PlanError::MissingInitialInventory(m) if m == "BREAD"));
    }

    #[test]
    fn test_missing_safety_stock_defaults_to_zero() {
        let stock = StockLevels::default();

        assert_eq!(stock.safety_stock("BREAD"), 0.0);
    }

    #[test]
    fn test_validate_initial_stock() {
        let mut stock = StockLevels::default();
        stock.set("BREAD", 100.0, 0.0);

        let ok_list = vec!["BREAD".to_string()];
        assert!(stock.validate_initial_stock(&ok_list).is_ok());

        let bad_list = vec!["BREAD".to_string(), "FLOUR".to_string()];
        let err = stock.validate_initial_stock(&bad_list).unwrap_err();
        assert!(matches!(err, PlanError::MissingInitialInventory(m) if m == "FLOUR"));
    }
}
