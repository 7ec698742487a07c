use crate::config::types::{MAX_RECENT_PATHS, UserSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 把使用者偏好寫回工作目錄的 settings.json
pub fn save_settings(settings: &UserSettings) -> Result<()> {
    let path = Path::new("settings.json");
    let content = serde_json::to_string_pretty(settings).context("無法序列化設定")?;

    fs::write(path, content).with_context(|| format!("無法寫入設定檔 {}", path.display()))?;

    Ok(())
}

/// 把路徑記進最近使用清單
///
/// 最新的排最前面，同一路徑只留一筆，最多保留 MAX_RECENT_PATHS 筆
pub fn add_recent_path(settings: &mut UserSettings, path: &str) {
    settings.recent_paths.retain(|p| p != path);
    settings.recent_paths.insert(0, path.to_string());
    settings.recent_paths.truncate(MAX_RECENT_PATHS);
}
