//! Application configuration loaded from environment variables.

use serde::{Deserialize, Deserializer};

/// Port used when `PORT` is unset or not a valid port number.
pub const DEFAULT_PORT: u16 = 3001;

/// Output format of the log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP port for the API listener.
    #[serde(default = "default_port", deserialize_with = "lenient_port")]
    pub port: u16,

    /// Port for the Prometheus exporter. Unset disables the exporter.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Logging ===
    /// Log filter directives (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log line format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Accepts any string for `PORT`, falling back to the default when it does
/// not parse as a port number.
fn lenient_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(DEFAULT_PORT))
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Build configuration from explicit key/value pairs instead of the
    /// process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.metrics_port == Some(self.port) {
            return Err(format!(
                "METRICS_PORT must differ from PORT (both are {})",
                self.port
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            metrics_port: None,
            rust_log: default_log_level(),
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}
