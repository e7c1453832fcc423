use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::filter::FilterConfig;

pub const DEFAULT_CONFIG_PATH: &str = "src/configs/auction.toml";
pub const DEFAULT_ENV_PREFIX: &str = "AUCTION";

/// Application settings: built-in defaults, then the TOML file, then
/// `AUCTION_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory of the export store.
    pub output_dir: String,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Also write the filtered records as Parquet.
    pub write_parquet: bool,
    /// Keep a copy of every raw batch in the export store.
    pub store_raw: bool,
    /// Base filters for every query; command line options win.
    #[serde(default)]
    pub filters: FilterConfig,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with_env_prefix(path, DEFAULT_ENV_PREFIX)
    }

    pub fn load_with_env_prefix(path: &str, env_prefix: &str) -> Result<Self> {
        let defaults = AppConfig::default();

        let settings = Config::builder()
            .set_default("output_dir", defaults.output_dir)?
            .set_default("log_level", defaults.log_level)?
            .set_default("write_parquet", defaults.write_parquet)?
            .set_default("store_raw", defaults.store_raw)?
            .add_source(File::from(Path::new(path)).required(false))
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()
            .with_context(|| format!("Failed to load configuration: {}", path))?;

        settings
            .try_deserialize::<AppConfig>()
            .with_context(|| format!("Failed to parse configuration: {}", path))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: "output".to_string(),
            log_level: "info".to_string(),
            write_parquet: false,
            store_raw: false,
            filters: FilterConfig::default(),
        }
    }
}
