use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Settings shared by every service: listening port and log level.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_uses_defaults() {
        let config: Config = Cfg::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("Failed to deserialize empty config");

        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: Config = Cfg::builder()
            .set_override("port", 9100)
            .and_then(|b| b.set_override("log_level", "debug"))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .expect("Failed to deserialize config");

        assert_eq!(config.port, 9100);
        assert_eq!(config.log_level, "debug");
    }
}
