// src/config.rs
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

fn default_environment() -> String {
    "development".to_string()
}

/// Process configuration for the record store connection. All identifiers are
/// opaque strings handed through to the upstream API.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub base_url: String,
    pub api_token: String,
    pub tools_table_id: String,
    pub tools_view_id: String,
    pub posts_table_id: String,
    pub posts_view_id: String,
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Settings {
    /// Load from an optional `config` file layered under `APP_*` environment
    /// variables. Missing required values fail here, before any client is
    /// constructed.
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP"));

        if let Ok(env) = std::env::var("APP_ENV") {
            builder =
                builder.add_source(File::with_name(&format!("config.{}", env)).required(false));
        }

        builder.build()?.try_deserialize()
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
