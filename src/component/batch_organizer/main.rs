use super::executor::{OrganizeEvent, OrganizeSummary, execute_plan};
use super::planner::{OrganizePlan, build_plan, sort_by_creation_time};
use crate::config::{Config, NamingScheme, SortOrder};
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::scan_video_files;
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 影片分批整理元件（互動流程）
pub struct BatchOrganizer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl BatchOrganizer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== 影片分批整理 ===").cyan().bold());

        // 取得輸入路徑
        let Some(input_path) = self.prompt_input_path()? else {
            return Ok(()); // ESC pressed
        };
        let directory = PathBuf::from(&input_path);

        // 取得批次參數
        let batch_size = self.prompt_batch_size()?;
        let Some(sort_order) = self.prompt_sort_order()? else {
            return Ok(());
        };
        let Some(naming_scheme) = self.prompt_naming_scheme()? else {
            return Ok(());
        };

        // 掃描快照
        println!("{}", style("掃描影片檔案中...").dim());
        let mut files = scan_video_files(&directory, &self.config.settings.extension_set())?;

        if files.is_empty() {
            println!("{}", style("找不到任何符合的影片檔案").yellow());
            return Ok(());
        }

        // 排序並建立計畫
        sort_by_creation_time(&mut files, sort_order);
        let plan = build_plan(&directory, files, batch_size, naming_scheme)?;

        self.print_plan_summary(&plan);

        // 確認是否執行
        if !self.confirm_move(&plan)? {
            println!("{}", style("操作已取消").yellow());
            return Ok(());
        }

        // 更新路徑歷史與偏好設定並儲存
        {
            let mut settings = self.config.settings.clone();
            add_recent_path(&mut settings, &input_path);
            settings.batch_size = batch_size;
            settings.sort_order = sort_order;
            settings.naming_scheme = naming_scheme;
            if let Err(e) = save_settings(&settings) {
                warn!("無法儲存設定: {e}");
            }
        }

        // 檢查中斷訊號
        if self.shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止處理");
            return Ok(());
        }

        // 執行移動
        println!("{}", style("移動檔案中...").cyan());
        let summary = self.execute_with_progress(&plan)?;

        self.print_result(&summary);

        Ok(())
    }

    fn prompt_input_path(&self) -> Result<Option<String>> {
        let recent_paths = &self.config.settings.recent_paths;

        // 如果沒有歷史路徑，直接輸入
        if recent_paths.is_empty() {
            let path: String = Input::new()
                .with_prompt("請輸入影片資料夾路徑")
                .interact_text()?;
            return Ok(Some(path.trim().to_string()));
        }

        // 建立選項清單：歷史路徑 + 輸入新路徑
        let mut options: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let exists = Path::new(p).exists();
                let indicator = if exists { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        options.push("輸入新路徑...".to_string());

        println!("{}", style("(按 ESC 返回主選單)").dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("請選擇路徑")
            .items(&options)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(recent_paths[idx].clone())),
            Some(_) => {
                let path: String = Input::new()
                    .with_prompt("請輸入影片資料夾路徑")
                    .interact_text()?;
                Ok(Some(path.trim().to_string()))
            }
        }
    }

    fn prompt_batch_size(&self) -> Result<i64> {
        let batch_size: i64 = Input::new()
            .with_prompt("每個資料夾的影片數量")
            .default(self.config.settings.batch_size)
            .validate_with(|size: &i64| {
                if *size > 0 {
                    Ok(())
                } else {
                    Err("批次大小必須大於 0")
                }
            })
            .interact_text()?;
        Ok(batch_size)
    }

    fn prompt_sort_order(&self) -> Result<Option<SortOrder>> {
        let orders = [SortOrder::Ascending, SortOrder::Descending];
        let options: Vec<&str> = orders.iter().map(|o| o.display_name()).collect();
        let default = orders
            .iter()
            .position(|o| *o == self.config.settings.sort_order)
            .unwrap_or(0);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("排序方向")
            .items(&options)
            .default(default)
            .interact_opt()?;

        Ok(selection.map(|idx| orders[idx]))
    }

    fn prompt_naming_scheme(&self) -> Result<Option<NamingScheme>> {
        let schemes = [
            NamingScheme::SequentialIndex,
            NamingScheme::DayIndex,
            NamingScheme::DateFromBatch,
        ];
        let options: Vec<&str> = schemes.iter().map(|s| s.display_name()).collect();
        let default = schemes
            .iter()
            .position(|s| *s == self.config.settings.naming_scheme)
            .unwrap_or(0);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("資料夾命名方式")
            .items(&options)
            .default(default)
            .interact_opt()?;

        Ok(selection.map(|idx| schemes[idx]))
    }

    fn print_plan_summary(&self, plan: &OrganizePlan) {
        println!();
        println!(
            "{}",
            style(format!(
                "找到 {} 個影片，將分成 {} 個批次：",
                plan.total_files(),
                plan.batches.len()
            ))
            .green()
        );
        println!();

        // 只顯示前 10 個批次
        let display_count = plan.batches.len().min(10);
        for batch in plan.batches.iter().take(display_count) {
            println!(
                "  {} {} - {} 個檔案",
                style("→").dim(),
                style(&batch.folder_name).cyan(),
                batch.files.len()
            );
        }
        if plan.batches.len() > display_count {
            println!(
                "  {} ...還有 {} 個批次",
                style("⋯").dim(),
                plan.batches.len() - display_count
            );
        }

        println!();
    }

    fn confirm_move(&self, plan: &OrganizePlan) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "確定要移動 {} 個影片到 {} 個資料夾嗎？",
                plan.total_files(),
                plan.batches.len()
            ))
            .default(true)
            .interact()?;
        Ok(confirm)
    }

    fn execute_with_progress(&self, plan: &OrganizePlan) -> Result<OrganizeSummary> {
        let progress_bar = ProgressBar::new(plan.total_files() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message("移動中...");

        let summary = execute_plan(plan, &self.shutdown_signal, |event| match event {
            OrganizeEvent::FileMoved {
                file_name,
                folder_name,
                ..
            } => {
                progress_bar.set_message(format!("{file_name} -> {folder_name}"));
                progress_bar.inc(1);
            }
            OrganizeEvent::FileFailed { file_name, .. } => {
                progress_bar.set_message(format!("失敗: {file_name}"));
                progress_bar.inc(1);
            }
        })?;

        if summary.interrupted {
            progress_bar.abandon_with_message("操作已中斷");
        } else {
            progress_bar.finish_with_message("完成");
        }

        Ok(summary)
    }

    fn print_result(&self, summary: &OrganizeSummary) {
        println!();
        println!("{}", style("=== 整理結果 ===").cyan().bold());
        println!("  成功移動: {} 個檔案", style(summary.files_moved).green());
        println!("  使用資料夾: {} 個", summary.folders_used);

        if summary.files_failed > 0 {
            println!("  失敗: {} 個檔案", style(summary.files_failed).red());
            for failure in &summary.failures {
                println!(
                    "    {} {}: {}",
                    style("✗").red(),
                    failure.file_name,
                    failure.error
                );
            }
        }

        if summary.interrupted {
            println!("  {}", style("執行已被中斷，未完成的檔案保留原位").yellow());
        }

        info!(
            "影片整理完成 - 移動: {}, 失敗: {}, 資料夾: {}",
            summary.files_moved, summary.files_failed, summary.folders_used
        );
    }
}
