//! 整理計畫的執行
//!
//! 依計畫順序逐批建立資料夾、逐檔移動，單一檔案失敗不會中斷整個流程

use super::planner::OrganizePlan;
use crate::error::OrganizeError;
use crate::tools::{ensure_directory_exists, move_file};
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};

/// 連續失敗達到此數量視為系統性 I/O 錯誤，中止執行
const MAX_CONSECUTIVE_FAILURES: usize = 10;

/// 執行過程中發出的事件，只攜帶字串與數字的不可變快照
#[derive(Debug, Clone)]
pub enum OrganizeEvent {
    /// 單一檔案移動成功
    FileMoved {
        file_name: String,
        folder_name: String,
        /// 整體進度百分比（無條件捨去）
        percent: u64,
    },
    /// 單一檔案移動失敗，執行會繼續
    FileFailed { file_name: String, error: String },
}

/// 單一檔案的失敗紀錄
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub file_name: String,
    pub error: String,
}

/// 執行結果摘要
#[derive(Debug, Default)]
pub struct OrganizeSummary {
    pub files_moved: usize,
    pub files_failed: usize,
    /// 建立或重用的資料夾數量
    pub folders_used: usize,
    /// 是否因中斷訊號提前停止
    pub interrupted: bool,
    pub failures: Vec<FileFailure>,
}

/// 依計畫順序執行移動
///
/// 每個檔案移動之間檢查中斷訊號；來源目錄消失、資料夾建立失敗或
/// 連續多次移動失敗時以 `Fatal` 中止，已完成的移動不會回復
pub fn execute_plan(
    plan: &OrganizePlan,
    shutdown_signal: &AtomicBool,
    mut on_event: impl FnMut(OrganizeEvent),
) -> Result<OrganizeSummary, OrganizeError> {
    let total = plan.total_files().max(1);
    let mut summary = OrganizeSummary::default();
    let mut processed = 0usize;
    let mut consecutive_failures = 0usize;

    'batches: for batch in &plan.batches {
        if shutdown_signal.load(Ordering::SeqCst) {
            info!("收到中斷訊號，停止移動");
            summary.interrupted = true;
            break;
        }

        if !plan.source_dir.exists() {
            return Err(OrganizeError::Fatal {
                reason: format!("來源資料夾已消失: {}", plan.source_dir.display()),
                moved: summary.files_moved,
                failed: summary.files_failed,
            });
        }

        let folder_path = plan.source_dir.join(&batch.folder_name);
        if let Err(e) = ensure_directory_exists(&folder_path) {
            return Err(OrganizeError::Fatal {
                reason: format!("無法建立資料夾 {}: {e}", folder_path.display()),
                moved: summary.files_moved,
                failed: summary.files_failed,
            });
        }
        summary.folders_used += 1;

        for file in &batch.files {
            if shutdown_signal.load(Ordering::SeqCst) {
                info!("收到中斷訊號，停止移動");
                summary.interrupted = true;
                break 'batches;
            }

            processed += 1;
            let target = folder_path.join(&file.name);

            match move_file(&file.path, &target) {
                Ok(()) => {
                    consecutive_failures = 0;
                    summary.files_moved += 1;
                    on_event(OrganizeEvent::FileMoved {
                        file_name: file.name.clone(),
                        folder_name: batch.folder_name.clone(),
                        percent: (processed * 100 / total) as u64,
                    });
                }
                Err(e) => {
                    consecutive_failures += 1;
                    summary.files_failed += 1;
                    warn!("移動檔案失敗 {}: {e}", file.path.display());
                    summary.failures.push(FileFailure {
                        file_name: file.name.clone(),
                        error: e.to_string(),
                    });
                    on_event(OrganizeEvent::FileFailed {
                        file_name: file.name.clone(),
                        error: e.to_string(),
                    });

                    if consecutive_failures >= MAX_CONSECUTIVE_FAILURES {
                        return Err(OrganizeError::Fatal {
                            reason: format!("連續 {consecutive_failures} 次移動失敗"),
                            moved: summary.files_moved,
                            failed: summary.files_failed,
                        });
                    }
                }
            }
        }
    }

    info!(
        "整理完成 - 移動: {}, 失敗: {}, 資料夾: {}",
        summary.files_moved, summary.files_failed, summary.folders_used
    );

    Ok(summary)
}
