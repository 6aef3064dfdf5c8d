//! 設備產能模型

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// (設備, 配方) → 最大產能（單位數/小時）
///
/// 未配置的組合產能為 0：該設備不能以該配方生產任何東西。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapacityMap {
    capacities: HashMap<(String, String), f64>,
}

impl CapacityMap {
    /// 從映射創建產能表
    pub fn new(capacities: HashMap<(String, String), f64>) -> Self {
        Self { capacities }
    }

    /// 設置 (設備, 配方) 組合的最大產能
    pub fn set(&mut self, equipment: impl Into<String>, formula: impl Into<String>, capacity: f64) {
        self.capacities
            .insert((equipment.into(), formula.into()), capacity);
    }

    /// 查詢 (設備, 配方) 的最大產能，未配置時為 0.0
    pub fn max_capacity(&self, equipment: &str, formula: &str) -> f64 {
        self.capacities
            .get(&(equipment.to_string(), formula.to_string()))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_lookup() {
        let mut capacity = CapacityMap::default();
        capacity.set("LINE-1", "F-BREAD", 120.0);

        assert_eq!(capacity.max_capacity("LINE-1", "F-BREAD"), 120.0);
    }

    #[test]
    fn test_unmapped_pair_has_zero_capacity() {
        let capacity = CapacityMap::default();

        // 未配置的組合不能生產任何東西
        assert_eq!(capacity.max_capacity("LINE-1", "F-BREAD"), 0.0);
    }
}
