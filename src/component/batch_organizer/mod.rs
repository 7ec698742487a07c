//! 影片分批整理元件
//!
//! 掃描資料夾第一層的影片檔案，依建立時間排序後切成固定大小的批次，
//! 移動到 Group_1、Group_2 ...（或日期命名）的子資料夾

mod executor;
mod main;
mod planner;

pub use executor::{FileFailure, OrganizeEvent, OrganizeSummary, execute_plan};
pub use main::BatchOrganizer;
pub use planner::{Batch, OrganizePlan, build_plan, sort_by_creation_time};
