use env_logger::Env;

/// 로거를 초기화한다. `RUST_LOG`가 있으면 그 값을 따르고, 없으면 warn(verbose면 debug).
/// 두 번 호출해도 무시된다.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
