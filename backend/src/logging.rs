use log::{debug, LevelFilter};

/// Install the `env_logger` backend.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (e.g. `"info"`) is
/// used. Calling this again after a logger is installed does nothing.
pub fn init(default_level: &str) {
    let level = parse_level(default_level);

    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();

    if result.is_ok() {
        debug!("Logging initialized at {}", level);
    }
}

/// Unknown level names fall back to `info`
fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}
