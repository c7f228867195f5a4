use serde::{Deserialize, Serialize};

/// Feature flags controlling optional pieces of the shell.
///
/// Loaded from `config.toml`. Every field has a default so that a missing
/// or incomplete config file still yields a working application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Show the "any email and password works" notice on the login page.
    #[serde(default = "default_true")]
    pub demo_login_hint: bool,
    /// Tick the home page clock every second instead of rendering it once.
    #[serde(default = "default_true")]
    pub live_clock: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            demo_login_hint: true,
            live_clock: true,
        }
    }
}

/// Branding shown on the login card and in the sidebar header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyInfo {
    #[serde(default = "default_company_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_logo")]
    pub logo: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            tagline: default_tagline(),
            logo: default_logo(),
        }
    }
}

/// Log verbosity accepted in `[logging] level`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub company: CompanyInfo,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_true() -> bool {
    true
}

fn default_company_name() -> String {
    "Acme Corp".to_string()
}

fn default_tagline() -> String {
    "Employee Dashboard".to_string()
}

fn default_logo() -> String {
    "\u{1F3E2}".to_string()
}
