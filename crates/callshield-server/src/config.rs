//! Server configuration
//!
//! Sources, lowest precedence first: built-in defaults, `config/server.*`
//! (optional), `CALLSHIELD_*` environment variables. A `.env` file is loaded
//! into the environment beforehand if present.

use callshield_sdk::{EngineConfig, Page, StorePolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Default log level when `RUST_LOG` is not set
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// YAML file with initial rules and blacklist entries
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Reject rules whose keyword already exists
    #[serde(default = "default_true")]
    pub unique_keywords: bool,

    /// Reject numbers that are already blacklisted
    #[serde(default = "default_true")]
    pub unique_numbers: bool,

    /// Upper bound on the `limit` query parameter of list endpoints
    #[serde(default = "default_max_page_limit")]
    pub max_page_limit: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_page_limit() -> usize {
    Page::MAX_LIMIT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            seed_file: None,
            unique_keywords: true,
            unique_numbers: true,
            max_page_limit: default_max_page_limit(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from("config/server")
    }

    /// Load with an explicit config file base name (extension optional)
    pub fn load_from(file: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("CALLSHIELD").try_parsing(true))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Engine settings derived from this configuration
    pub fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::new()
            .with_policy(StorePolicy {
                unique_keywords: self.unique_keywords,
                unique_numbers: self.unique_numbers,
            })
            .with_max_page_limit(self.max_page_limit);

        match &self.seed_file {
            Some(path) => config.with_seed_file(path.clone()),
            None => config,
        }
    }
}
