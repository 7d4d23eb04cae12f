use crate::error::ConfigError;
use log::LevelFilter;
use std::path::PathBuf;

pub const DEFAULT_DECKS_DIR: &str = "decks";
pub const DEFAULT_LOG_FILE: &str = "knowledge_check.log";

pub const DECKS_DIR_VAR: &str = "KNOWLEDGE_CHECK_DECKS";
pub const LOG_FILE_VAR: &str = "KNOWLEDGE_CHECK_LOG";
pub const LOG_LEVEL_VAR: &str = "KNOWLEDGE_CHECK_LOG_LEVEL";
pub const SEED_VAR: &str = "KNOWLEDGE_CHECK_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub decks_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Seed for drawing questions from large banks. Random when unset.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            decks_dir: PathBuf::from(DEFAULT_DECKS_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DECKS_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.decks_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup(LOG_FILE_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_file = PathBuf::from(file);
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = parse_level(&level)?;
        }
        if let Some(seed) = lookup(SEED_VAR) {
            config.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?,
            );
        }

        Ok(config)
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::InvalidLogLevel(value.to_string())),
    }
}
