use crate::component::batch_organizer::{
    OrganizeEvent, build_plan, execute_plan, sort_by_creation_time,
};
use crate::config::{Config, ExtensionSet, NamingScheme, SortOrder};
use crate::tools::scan_video_files;
use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

#[derive(Parser, Debug)]
#[command(
    name = "smart_video_grouper",
    version,
    about = "將影片依建立時間分批移動到編號資料夾"
)]
pub struct Cli {
    /// 影片來源資料夾（省略時進入互動模式）
    pub source: Option<std::path::PathBuf>,

    /// 每個資料夾的影片數量
    #[arg(short, long)]
    pub batch_size: Option<i64>,

    /// 排序方向
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// 資料夾命名方式
    #[arg(long, value_enum)]
    pub naming: Option<NamingScheme>,

    /// 影片副檔名（可重複指定，會取代預設清單）
    #[arg(long = "ext")]
    pub extensions: Vec<String>,
}

/// 非互動模式：掃描、規劃、執行，一行一個事件輸出
///
/// 單一檔案的失敗只計數不影響結束碼；路徑錯誤、批次大小錯誤
/// 或執行中止才回傳錯誤
pub fn run_non_interactive(
    cli: &Cli,
    source: &Path,
    config: &Config,
    shutdown_signal: &Arc<AtomicBool>,
) -> Result<()> {
    let settings = &config.settings;
    let batch_size = cli.batch_size.unwrap_or(settings.batch_size);
    let sort_order = cli.sort.unwrap_or(settings.sort_order);
    let naming_scheme = cli.naming.unwrap_or(settings.naming_scheme);
    let extensions = if cli.extensions.is_empty() {
        settings.extension_set()
    } else {
        ExtensionSet::new(cli.extensions.iter())
    };

    let mut files = scan_video_files(source, &extensions)?;

    if files.is_empty() {
        println!("{}", style("找不到任何符合的影片檔案").yellow());
        return Ok(());
    }

    sort_by_creation_time(&mut files, sort_order);
    let plan = build_plan(source, files, batch_size, naming_scheme)?;

    let summary = execute_plan(&plan, shutdown_signal, |event| match event {
        OrganizeEvent::FileMoved {
            file_name,
            folder_name,
            percent,
        } => {
            println!("已移動 {file_name} -> {folder_name} ({percent}%)");
        }
        OrganizeEvent::FileFailed { file_name, error } => {
            eprintln!("{} {file_name}: {error}", style("移動失敗").red());
        }
    })?;

    println!(
        "整理完成：移動 {} 個影片到 {} 個資料夾",
        summary.files_moved, summary.folders_used
    );
    if summary.files_failed > 0 {
        eprintln!("{} {} 個檔案移動失敗", style("注意:").yellow(), summary.files_failed);
    }
    if summary.interrupted {
        eprintln!("{}", style("執行已被中斷，未完成的檔案保留原位").yellow());
    }

    Ok(())
}
