//! BOM（物料清單）表模型

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// BOM 資料列：某配方下父物料對子物料的比例關係
///
/// 一列表示「在 `formula` 配方下，每生產一單位 `manufactured_good`
/// 需要消耗 `proportion` 單位的 `component`」。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomRow {
    /// 配方ID
    pub formula: String,
    /// 父物料（製成品）
    pub manufactured_good: String,
    /// 子物料（原料/組件）
    pub component: String,
    /// 子物料比例（每單位父物料的用量）
    pub proportion: f64,
}

impl BomRow {
    /// 創建新的 BOM 資料列
    pub fn new(
        formula: impl Into<String>,
        manufactured_good: impl Into<String>,
        component: impl Into<String>,
        proportion: f64,
    ) -> Self {
        Self {
            formula: formula.into(),
            manufactured_good: manufactured_good.into(),
            component: component.into(),
            proportion,
        }
    }
}

/// BOM 查詢表
///
/// 由扁平的 (配方, 父物料, 子物料) → 比例 關係建成。BOM 天生稀疏：
/// 查詢不存在的三元組回傳 0（表示無依賴關係），永遠不是錯誤。
#[derive(Debug, Clone, Default)]
pub struct Bom {
    /// (配方, 父物料, 子物料) → 比例
    proportions: HashMap<(String, String, String), f64>,

    /// 曾作為父物料出現的物料（廠內生產）
    parent_materials: BTreeSet<String>,

    /// 曾作為子物料出現的物料
    component_materials: BTreeSet<String>,
}

impl Bom {
    /// 從 BOM 資料列建表
    pub fn from_rows(rows: &[BomRow]) -> Self {
        let mut proportions = HashMap::with_capacity(rows.len());
        let mut parent_materials = BTreeSet::new();
        let mut component_materials = BTreeSet::new();

        for row in rows {
            proportions.insert(
                (
                    row.formula.clone(),
                    row.manufactured_good.clone(),
                    row.component.clone(),
                ),
                row.proportion,
            );
            parent_materials.insert(row.manufactured_good.clone());
            component_materials.insert(row.component.clone());
        }

        Self {
            proportions,
            parent_materials,
            component_materials,
        }
    }

    /// 查詢配方下父物料對子物料的用量比例
    ///
    /// 三元組不存在時回傳 0.0（無依賴），不會報錯。
    pub fn required_quantity(&self, formula: &str, parent_material: &str, child_material: &str) -> f64 {
        self.proportions
            .get(&(
                formula.to_string(),
                parent_material.to_string(),
                child_material.to_string(),
            ))
            .copied()
            .unwrap_or(0.0)
    }

    /// 所有父物料（在任一配方下作為製成品出現）
    pub fn all_parent_materials(&self) -> &BTreeSet<String> {
        &self.parent_materials
    }

    /// 所有子物料（在任一配方下作為組件出現）
    ///
    /// 副產品同時作為其他配方投入時，會同時出現在父物料集合中，
    /// 兩個集合的交集必須保留，不可去重。
    pub fn all_component_materials(&self) -> &BTreeSet<String> {
        &self.component_materials
    }

    /// 廠內生產的物料（父物料集合成員）
    pub fn produced_in_house(&self, material: &str) -> bool {
        self.parent_materials.contains(material)
    }

    /// 純外購物料：只作為子物料出現、從未被任何配方生產
    pub fn externally_procured(&self, material: &str) -> bool {
        self.component_materials.contains(material) && !self.parent_materials.contains(material)
    }

    /// 純外購物料集合
    pub fn externally_procured_materials(&self) -> BTreeSet<String> {
        self.component_materials
            .difference(&self.parent_materials)
            .cloned()
            .collect()
    }

    /// BOM 關係數量
    pub fn len(&self) -> usize {
        self.proportions.len()
    }

    /// 是否為空表
    pub fn is_empty(&self) -> bool {
        self.proportions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bom() -> Bom {
        // BREAD 由 FLOUR + WATER 製成；FLOUR 由 WHEAT 製成
        Bom::from_rows(&[
            BomRow::new("F-BREAD", "BREAD", "FLOUR", 0.8),
            BomRow::new("F-BREAD", "BREAD", "WATER", 0.5),
            BomRow::new("F-FLOUR", "FLOUR", "WHEAT", 1.2),
        ])
    }

    #[test]
    fn test_required_quantity_lookup() {
        let bom = sample_bom();

        assert_eq!(bom.required_quantity("F-BREAD", "BREAD", "FLOUR"), 0.8);
        assert_eq!(bom.required_quantity("F-BREAD", "BREAD", "WATER"), 0.5);
        assert_eq!(bom.required_quantity("F-FLOUR", "FLOUR", "WHEAT"), 1.2);
    }

    #[test]
    fn test_required_quantity_missing_triple_is_zero() {
        let bom = sample_bom();

        // 不存在的三元組回傳 0，絕不報錯
        assert_eq!(bom.required_quantity("F-BREAD", "BREAD", "WHEAT"), 0.0);
        assert_eq!(bom.required_quantity("F-FLOUR", "BREAD", "FLOUR"), 0.0);
        assert_eq!(bom.required_quantity("NO-SUCH", "X", "Y"), 0.0);
    }

    #[test]
    fn test_parent_and_component_sets() {
        let bom = sample_bom();

        let parents: Vec<&str> = bom.all_parent_materials().iter().map(|s| s.as_str()).collect();
        assert_eq!(parents, vec!["BREAD", "FLOUR"]);

        let components: Vec<&str> = bom
            .all_component_materials()
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(components, vec!["FLOUR", "WATER", "WHEAT"]);
    }

    #[test]
    fn test_material_in_both_sets_is_preserved() {
        let bom = sample_bom();

        // FLOUR 既是 F-FLOUR 的製成品又是 F-BREAD 的投入，兩邊都要保留
        assert!(bom.all_parent_materials().contains("FLOUR"));
        assert!(bom.all_component_materials().contains("FLOUR"));

        // 因此 FLOUR 屬廠內生產、不屬純外購
        assert!(bom.produced_in_house("FLOUR"));
        assert!(!bom.externally_procured("FLOUR"));
    }

    #[test]
    fn test_externally_procured_classification() {
        let bom = sample_bom();

        // 只作為子物料出現的物料才是純外購
        assert!(bom.externally_procured("WATER"));
        assert!(bom.externally_procured("WHEAT"));
        assert!(!bom.externally_procured("BREAD"));

        let procured: Vec<String> = bom.externally_procured_materials().into_iter().collect();
        assert_eq!(procured, vec!["WATER".to_string(), "WHEAT".to_string()]);
    }

    #[test]
    fn test_empty_bom() {
        let bom = Bom::from_rows(&[]);

        assert!(bom.is_empty());
        assert_eq!(bom.required_quantity("F", "P", "C"), 0.0);
        assert!(bom.all_parent_materials().is_empty());
        assert!(bom.externally_procured_materials().is_empty());
    }
}
