//! Server Configuration

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Path to the serialized model artifact
    pub model_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            model_path: "models/census_income.json".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration: built-in defaults, then `config/default.toml`
    /// when present, then `CENSUS_API_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default("model_path", defaults.model_path)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("CENSUS_API"))
            .build()?
            .try_deserialize()
    }
}
