use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// 移動檔案到目標路徑，保留原始檔名
///
/// 目標已存在時回報錯誤而不覆蓋；rename 失敗時（可能是跨檔案系統）
/// 改用複製後刪除
pub fn move_file(source: &Path, target: &Path) -> io::Result<()> {
    if target.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("目標已存在: {}", target.display()),
        ));
    }

    match fs::rename(source, target) {
        Ok(()) => {
            debug!("移動檔案: {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(rename_err) => copy_and_delete(source, target).map_err(|copy_err| {
            io::Error::new(
                copy_err.kind(),
                format!(
                    "移動檔案失敗 {} -> {}: {copy_err} (rename 錯誤: {rename_err})",
                    source.display(),
                    target.display()
                ),
            )
        }),
    }
}

/// 複製檔案後刪除原檔案
fn copy_and_delete(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;
    fs::remove_file(source)?;
    Ok(())
}
