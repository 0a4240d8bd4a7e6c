//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file, looked up relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config/conflang";

/// Environment variable prefix for overrides (`CONFLANG_MAX_DEPTH`, ...)
pub const ENV_PREFIX: &str = "CONFLANG";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,

    /// Deepest mapping/sequence nesting accepted
    pub max_depth: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            max_depth: conflang_compiler::validator::DEFAULT_MAX_DEPTH,
        }
    }
}

impl CliConfig {
    /// Load configuration from `.env`, the default config file and environment variables
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("не удалось разобрать конфигурацию: {}", e)),
            Err(e) => {
                tracing::debug!("No usable config found ({}), using defaults", e);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit file; the file must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| anyhow::anyhow!("не удалось загрузить конфигурацию {}: {}", path.display(), e))
    }
}
