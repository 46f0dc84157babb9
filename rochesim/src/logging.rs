//! Diagnostics go to stderr through `log`/`env_logger`, never to the data file.

use log::LevelFilter;

/// Install the logger. `RUST_LOG` wins when set; otherwise this crate logs at
/// `level` and everything else stays quiet.
pub fn init_with_level(level: LevelFilter) {
    let filter = format!("{}={}", env!("CARGO_CRATE_NAME"), level.as_str().to_lowercase());

    // try_init: tests and embedders may already have installed a logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init();
}

pub fn init() {
    init_with_level(LevelFilter::Info);
}
