use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

use crate::catalog::{load_catalog_csv, Catalog};

pub const SEED_ENV_VAR: &str = "RECIPE_SEED";
pub const CATALOG_ENV_VAR: &str = "RECIPE_CATALOG_CSV";
pub const LOG_LEVEL_ENV_VAR: &str = "RECIPE_LOG_LEVEL";
pub const LOG_FORMAT_ENV_VAR: &str = "RECIPE_LOG_FORMAT";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!("unknown log format '{}' (expected pretty or json)", other)),
        }
    }
}

/// Runtime settings for the binary. Values come from the environment (and a
/// `.env` file, when present); command-line flags override them.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub seed: Option<u64>,
    pub catalog_csv: Option<PathBuf>,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            seed: None,
            catalog_csv: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let seed = get(SEED_ENV_VAR)
            .map(|raw| {
                raw.parse::<u64>()
                    .with_context(|| format!("{} must be an unsigned integer (got '{}')", SEED_ENV_VAR, raw))
            })
            .transpose()?;
        let log_format = get(LOG_FORMAT_ENV_VAR)
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()
            .with_context(|| format!("Invalid {}", LOG_FORMAT_ENV_VAR))?
            .unwrap_or_default();

        Ok(EngineConfig {
            seed,
            catalog_csv: get(CATALOG_ENV_VAR).map(PathBuf::from),
            log_level: get(LOG_LEVEL_ENV_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn with_catalog_csv(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_csv = path;
        }
        self
    }

    /// The configured CSV catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_csv {
            Some(path) => load_catalog_csv(path)
                .with_context(|| format!("Failed to load ingredient catalog from {:?}", path)),
            None => Ok(Catalog::builtin()),
        }
    }
}
