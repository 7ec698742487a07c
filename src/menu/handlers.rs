use crate::component::BatchOrganizer;
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_batch_organizer(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    let config = Config::new()?;
    let organizer = BatchOrganizer::new(config, Arc::clone(shutdown_signal));

    if let Err(e) = organizer.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
