use env_logger::Env;

/// 初始化 env_logger，預設只顯示 info 以上的訊息
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}
