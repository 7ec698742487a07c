use std::path::PathBuf;
use thiserror::Error;

/// 整理流程的錯誤分類
///
/// 掃描與規劃階段的錯誤在任何檔案被移動前同步回傳；
/// `Fatal` 只在執行階段發生，並帶回已完成的部分計數。
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("路徑不存在: {0}")]
    PathNotFound(PathBuf),

    #[error("路徑不是資料夾: {0}")]
    NotADirectory(PathBuf),

    #[error("無效的批次大小: {0}（必須大於 0）")]
    InvalidBatchSize(i64),

    #[error("執行中止: {reason}（已移動 {moved} 個檔案，失敗 {failed} 個）")]
    Fatal {
        reason: String,
        moved: usize,
        failed: usize,
    },
}
