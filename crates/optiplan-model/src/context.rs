//! 約束建構的共用上下文

use optiplan_core::{
    build_material_time_indexes, MaterialTimeIndex, PlanError, Result,
};

/// 約束建構上下文
///
/// 持有物料清單、時間範圍 [t0, tmax] 與預先計算好的物料×時間索引空間。
/// 五個約束族都以此上下文（加上各自的外部參數）為輸入，
/// 建構一次、衍生多條約束。
#[derive(Debug, Clone)]
pub struct ConstraintContext {
    /// 物料清單
    pub materials: Vec<String>,

    /// 模擬起點（受保護期：大多數變數在此被強制為零）
    pub t0: u32,

    /// 模擬終點（含）
    pub tmax: u32,

    /// 完整時間範圍的物料×時間索引空間
    pub material_time_indexes: Vec<MaterialTimeIndex>,

    /// 限制在 time == t0 的物料×時間索引空間（邊界條件用）
    pub material_t0_indexes: Vec<MaterialTimeIndex>,
}

impl ConstraintContext {
    /// 創建新的約束上下文
    ///
    /// `t0 > tmax` 視為配置錯誤。
    pub fn new(materials: Vec<String>, t0: u32, tmax: u32) -> Result<Self> {
        if t0 > tmax {
            return Err(PlanError::InvalidHorizon { t0, tmax });
        }

        let material_time_indexes = build_material_time_indexes(&materials, t0, tmax);
        let material_t0_indexes = build_material_time_indexes(&materials, t0, t0);

        Ok(Self {
            materials,
            t0,
            tmax,
            material_time_indexes,
            material_t0_indexes,
        })
    }

    /// 時間範圍長度（小時數）
    pub fn horizon_len(&self) -> usize {
        (self.tmax - self.t0) as usize + 1
    }
}
