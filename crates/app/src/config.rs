use shared_types::{AppConfig, LogLevel};
use std::sync::OnceLock;
use tracing::Level;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded at compile time.
const CONFIG_SOURCE: &str = include_str!("../../../config.toml");

/// Parse the embedded config and install it globally. On a parse error the
/// defaults are installed and the error is handed back so it can be logged
/// once the subscriber is up. Later calls leave the first config in place.
pub fn load_config() -> Option<toml::de::Error> {
    let (config, error) = match parse_config(CONFIG_SOURCE) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if CONFIG.set(config).is_err() {
        tracing::debug!("config already loaded; keeping the first one");
    }
    error
}

/// The loaded config, or defaults if [`load_config`] has not run.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

pub fn parse_config(source: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(source)
}

pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}
