use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 建立合作式中斷旗標
///
/// 執行器在每個檔案移動之間檢查旗標，收到 Ctrl-C 時完成
/// 目前的檔案後停止，不會把檔案移到一半
#[must_use]
pub fn setup_shutdown_signal() -> Arc<AtomicBool> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        signal_clone.store(true, Ordering::SeqCst);
        eprintln!("\n收到 Ctrl-C，完成目前檔案後停止...");
    })
    .expect("無法註冊 Ctrl-C 處理器");

    shutdown_signal
}
