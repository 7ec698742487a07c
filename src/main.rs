use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use log::{info, warn};
use smart_video_grouper::cli::{Cli, run_non_interactive};
use smart_video_grouper::config::Config;
use smart_video_grouper::init;
use smart_video_grouper::menu::show_main_menu;
use smart_video_grouper::signal::setup_shutdown_signal;

fn main() -> Result<()> {
    init::init();
    let cli = Cli::parse();
    let shutdown_signal = setup_shutdown_signal();

    let mut config = Config::new()?;

    // 有來源路徑參數時走非互動模式
    if let Some(source) = cli.source.clone() {
        return run_non_interactive(&cli, &source, &config, &shutdown_signal);
    }

    let term = Term::stdout();

    loop {
        match show_main_menu(&term, &shutdown_signal, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style("再見！").green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style("錯誤:").red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
