//! 需求計劃模型

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 需求計劃：(物料, 時間) → 訂購量
///
/// 查詢不存在的 (物料, 時間) 組合回傳 0：沒有訂單就沒有可出貨的上限。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemandSchedule {
    demand: HashMap<(String, u32), f64>,
}

impl DemandSchedule {
    /// 創建空的需求計劃
    pub fn new() -> Self {
        Self::default()
    }

    /// 登記某物料在某時間的需求量（同鍵累加）
    pub fn add(&mut self, material: impl Into<String>, time: u32, quantity: f64) {
        *self.demand.entry((material.into(), time)).or_insert(0.0) += quantity;
    }

    /// 查詢 (物料, 時間) 的需求量，未登記時為 0.0
    pub fn quantity(&self, material: &str, time: u32) -> f64 {
        self.demand
            .get(&(material.to_string(), time))
            .copied()
            .unwrap_or(0.0)
    }

    /// 需求登記筆數
    pub fn len(&self) -> usize {
        self.demand.len()
    }

    /// 是否沒有任何需求
    pub fn is_empty(&self) -> bool {
        self.demand.is_empty()
    }

    /// 所有已登記需求的最大時間點，無需求時為 None
    pub fn max_time(&self) -> Option<u32> {
        self.demand.keys().map(|(_, time)| *time).max()
    }
}

/// 將「第幾天」的日需求換算為絕對小時
///
/// 需求每天只在固定的出貨時刻釋放一次，第 1 天的出貨時刻
/// 即為 `filling_hour`：`(period - 1) * 24 + filling_hour`。
///
/// `period` 是 1 起算的天數。0 不是合法輸入，飽和減法把它
/// 收斂成第 1 天而不是回繞到範圍尾端。
pub fn hour_for_daily_period(period: u32, filling_hour: u32) -> u32 {
    (period.saturating_sub(1)) * 24 + filling_hour
}

/// 由最後一個需求小時推算計劃範圍終點
///
/// 取最後一天的收尾工時（當天結束前 4 小時），讓計劃涵蓋
/// 最後一次出貨之後的收尾時段。
pub fn horizon_for_last_demand_hour(last_demand_hour: u32) -> u32 {
    ((last_demand_hour / 24 + 1) * 24) - 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_demand_lookup_and_accumulation() {
        let mut demand = DemandSchedule::new();
        demand.add("BREAD", 32, 5.0);
        demand.add("BREAD", 32, 3.0);

        // 同鍵累加
        assert_eq!(demand.quantity("BREAD", 32), 8.0);
        assert_eq!(demand.len(), 1);
    }

    #[test]
    fn test_missing_demand_is_zero() {
        let demand = DemandSchedule::new();

        assert!(demand.is_empty());
        assert_eq!(demand.quantity("BREAD", 8), 0.0);
        assert_eq!(demand.max_time(), None);
    }

    #[test]
    fn test_max_time() {
        let mut demand = DemandSchedule::new();
        demand.add("BREAD", 8, 5.0);
        demand.add("BREAD", 56, 2.0);
        demand.add("CAKE", 32, 1.0);

        assert_eq!(demand.max_time(), Some(56));
    }

    #[rstest]
    #[case(1, 8, 8)] // 第 1 天 → 第 8 小時
    #[case(2, 8, 32)] // 第 2 天 → 第 32 小時
    #[case(3, 8, 56)]
    #[case(1, 12, 12)] // 出貨時刻可配置
    #[case(0, 8, 8)] // 非法的第 0 天收斂成第 1 天，不回繞
    fn test_hour_for_daily_period(#[case] period: u32, #[case] filling_hour: u32, #[case] expected: u32) {
        assert_eq!(hour_for_daily_period(period, filling_hour), expected);
    }

    #[rstest]
    #[case(8, 20)] // 第 1 天出貨 → 當天 20 時收尾
    #[case(32, 44)] // 第 2 天出貨 → 44
    #[case(56, 68)]
    fn test_horizon_for_last_demand_hour(#[case] last_hour: u32, #[case] expected: u32) {
        assert_eq!(horizon_for_last_demand_hour(last_hour), expected);
    }
}
