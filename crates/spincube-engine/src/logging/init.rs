use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "spincube_engine=debug"). It is only honoured on native targets.
///
/// `level` is the fallback maximum level, and the only knob the browser
/// console backend understands.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub level: log::Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            level: log::Level::Info,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in the entry point, before the context is acquired.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(config.level.to_level_filter());
    }

    // A test harness may already own the global logger.
    if builder.try_init().is_err() {
        log::debug!("global logger already set; keeping it");
    }
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    if console_log::init_with_level(config.level).is_err() {
        log::debug!("global logger already set; keeping it");
    }
}
