// Configuration module entry point
// Environment-driven settings, shared runtime state, and request counters

mod metrics;
mod state;

use serde::Deserialize;
use std::net::SocketAddr;

use crate::volumes::VolumeKind;

// Re-export public types
pub use state::AppState;

/// Runtime settings, read once from the environment at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub data_path: String,
    pub config_path: String,
    pub log_path: String,
    pub secret_key: String,
    pub db_password: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Load settings from environment variables, falling back to the
    /// development defaults for anything unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .set_default("app_name", "podboard")?
            .set_default("app_version", "1.0.0")?
            .set_default("environment", "development")?
            .set_default("data_path", "/data")?
            .set_default("config_path", "/config")?
            .set_default("log_path", "/logs")?
            .set_default("secret_key", "default-dev-key")?
            .set_default("db_password", "default-password")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// The three volume mounts in display order
    pub fn volume_paths(&self) -> [(VolumeKind, &str); 3] {
        [
            (VolumeKind::Data, self.data_path.as_str()),
            (VolumeKind::Config, self.config_path.as_str()),
            (VolumeKind::Logs, self.log_path.as_str()),
        ]
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
