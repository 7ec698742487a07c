use crate::config::ExtensionSet;
use crate::error::OrganizeError;
use crate::tools::validate_directory_exists;
use log::warn;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// 快照中的影片檔案
#[derive(Debug, Clone)]
pub struct VideoFile {
    pub path: PathBuf,
    /// 檔名（含副檔名）
    pub name: String,
    /// 平台回報的建立時間；沒有建立時間的檔案系統退回修改時間
    pub created: SystemTime,
}

/// 掃描目錄第一層的影片檔案（不遞迴）
///
/// 依檔名順序列舉，讓建立時間相同時的排序結果可重現。
/// 目錄不存在時回報 `PathNotFound`；沒有符合的檔案時回傳空清單，
/// 由呼叫端決定如何呈現
pub fn scan_video_files(
    directory: &Path,
    extensions: &ExtensionSet,
) -> Result<Vec<VideoFile>, OrganizeError> {
    validate_directory_exists(directory)?;

    let files = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| extensions.matches(entry.path()))
        .filter_map(|entry| {
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("無法讀取檔案資訊 {}: {e}", entry.path().display());
                    return None;
                }
            };
            let created = metadata
                .created()
                .or_else(|_| metadata.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            let name = entry.file_name().to_string_lossy().to_string();

            Some(VideoFile {
                path: entry.into_path(),
                name,
                created,
            })
        })
        .collect();

    Ok(files)
}
