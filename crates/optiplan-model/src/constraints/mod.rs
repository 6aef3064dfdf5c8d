//! 約束建構器
//!
//! 五個互相獨立的約束族：庫存、生產、物料流平衡、需求、採購。
//! 每族都是純函數：讀取不可變的上下文與外部參數，回傳約束物件，
//! 族與族之間沒有共享可變狀態。

pub mod demand;
pub mod flow;
pub mod inventory;
pub mod production;
pub mod purchasing;
