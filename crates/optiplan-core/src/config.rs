//! 計劃與求解器配置模型

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 批量、出貨時刻、工時窗口等業務參數
///
/// 參考行為固定為「批量 10、每天 8 時出貨、8–20 時開工、連續運轉上限 4 小時」，
/// 但這些都是配置參數而非硬編碼的業務規則。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// 一個批次的單位數；production 變數以批為單位，
    /// 實際物量一律等於 批數 × batch_size
    pub batch_size: f64,

    /// 每天釋放需求的時刻（0-23）
    pub demand_filling_hour: u32,

    /// 工廠每日開工時刻（含）
    pub factory_open_hour: u32,

    /// 工廠每日收工時刻（含）
    pub factory_close_hour: u32,

    /// 設備連續運轉的小時數上限
    pub max_continuous_run: u32,

    /// 設備狀態連結約束使用的 big-M 常數，
    /// 必須大於任何可行的單小時總產量
    pub big_m: f64,
}

impl PlanConfig {
    /// 創建新的計劃配置（其餘參數取預設值）
    pub fn new(batch_size: f64) -> Self {
        Self {
            batch_size,
            demand_filling_hour: 8,
            factory_open_hour: 8,
            factory_close_hour: 20,
            max_continuous_run: 4,
            big_m: 1e8,
        }
    }

    /// 建構器模式：設置每日出貨時刻
    pub fn with_demand_filling_hour(mut self, hour: u32) -> Self {
        self.demand_filling_hour = hour;
        self
    }

    /// 建構器模式：設置每日工時窗口 [open, close]（兩端皆含）
    pub fn with_working_hours(mut self, open_hour: u32, close_hour: u32) -> Self {
        self.factory_open_hour = open_hour;
        self.factory_close_hour = close_hour;
        self
    }

    /// 建構器模式：設置連續運轉上限
    pub fn with_max_continuous_run(mut self, hours: u32) -> Self {
        self.max_continuous_run = hours;
        self
    }

    /// 建構器模式：設置 big-M 常數
    pub fn with_big_m(mut self, big_m: f64) -> Self {
        self.big_m = big_m;
        self
    }

    /// 該時刻工廠是否關閉（對 24 取模後落在工時窗口之外）
    pub fn factory_closed_at(&self, time: u32) -> bool {
        let hour_of_day = time % 24;
        hour_of_day < self.factory_open_hour || hour_of_day > self.factory_close_hour
    }

    /// 該時刻是否為當天的出貨時刻
    pub fn is_demand_filling_hour(&self, time: u32) -> bool {
        time % 24 == self.demand_filling_hour
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// 求解器後端名稱
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverName {
    /// 內嵌的純 Rust 後端（預設）
    Microlp,
    /// 外部 CBC 命令列求解器（需啟用 external-solvers 特性）
    Cbc,
    /// 外部 GLPK 命令列求解器（需啟用 external-solvers 特性）
    Glpk,
}

/// 求解器配置：以名稱與可執行檔路徑明確選擇後端，
/// 不讀取任何環境變數或程序級全域狀態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// 後端名稱
    pub name: SolverName,

    /// 外部求解器的可執行檔路徑；None 時使用慣例命令名
    /// （cbc / glpsol），內嵌後端忽略此欄位
    pub executable_path: Option<PathBuf>,
}

impl SolverConfig {
    /// 創建新的求解器配置
    pub fn new(name: SolverName) -> Self {
        Self {
            name,
            executable_path: None,
        }
    }

    /// 建構器模式：設置可執行檔路徑
    pub fn with_executable_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable_path = Some(path.into());
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(SolverName::Microlp)
    }
}
