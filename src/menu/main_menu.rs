use crate::config::save::save_settings;
use crate::config::{Config, NamingScheme, SortOrder};
use crate::menu::handlers::run_batch_organizer;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== 影片分批整理系統 ===").cyan().bold());
    println!("{}", style("(按 ESC 離開)").dim());

    let options = vec!["開始整理影片", "設定", "離開"];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇功能")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_batch_organizer(term, shutdown_signal)?;
            Ok(true)
        }
        Some(1) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(2) | None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style("=== 設定 ===").cyan().bold());
        println!("{}", style("(按 ESC 返回主選單)").dim());

        let options = vec![
            format!("預設批次大小（目前: {}）", config.settings.batch_size),
            format!(
                "預設排序方向（目前: {}）",
                config.settings.sort_order.display_name()
            ),
            format!(
                "預設命名方式（目前: {}）",
                config.settings.naming_scheme.display_name()
            ),
            format!(
                "影片副檔名（目前: {}）",
                config.settings.video_extensions.join(", ")
            ),
            "返回".to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("請選擇設定項目")
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => edit_batch_size(config)?,
            Some(1) => edit_sort_order(config)?,
            Some(2) => edit_naming_scheme(config)?,
            Some(3) => edit_extensions(config)?,
            Some(4) | None => break, // ESC or back
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn edit_batch_size(config: &mut Config) -> Result<()> {
    let batch_size: i64 = Input::new()
        .with_prompt("預設每個資料夾的影片數量")
        .default(config.settings.batch_size)
        .validate_with(|size: &i64| {
            if *size > 0 {
                Ok(())
            } else {
                Err("批次大小必須大於 0")
            }
        })
        .interact_text()?;

    config.settings.batch_size = batch_size;
    save_settings(&config.settings)?;
    Ok(())
}

fn edit_sort_order(config: &mut Config) -> Result<()> {
    let orders = [SortOrder::Ascending, SortOrder::Descending];
    let options: Vec<&str> = orders.iter().map(|o| o.display_name()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("預設排序方向")
        .items(&options)
        .default(0)
        .interact_opt()?;

    if let Some(idx) = selection {
        config.settings.sort_order = orders[idx];
        save_settings(&config.settings)?;
    }
    Ok(())
}

fn edit_naming_scheme(config: &mut Config) -> Result<()> {
    let schemes = [
        NamingScheme::SequentialIndex,
        NamingScheme::DayIndex,
        NamingScheme::DateFromBatch,
    ];
    let options: Vec<&str> = schemes.iter().map(|s| s.display_name()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("預設命名方式")
        .items(&options)
        .default(0)
        .interact_opt()?;

    if let Some(idx) = selection {
        config.settings.naming_scheme = schemes[idx];
        save_settings(&config.settings)?;
    }
    Ok(())
}

fn edit_extensions(config: &mut Config) -> Result<()> {
    let current = config.settings.video_extensions.join(", ");
    let input: String = Input::new()
        .with_prompt("影片副檔名（逗號分隔）")
        .default(current)
        .interact_text()?;

    let extensions: Vec<String> = input
        .split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect();

    if extensions.is_empty() {
        println!("{}", style("副檔名清單不能為空，保留原設定").yellow());
        return Ok(());
    }

    config.settings.video_extensions = extensions;
    save_settings(&config.settings)?;
    Ok(())
}
