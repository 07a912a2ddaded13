use serde::{Deserialize, Serialize};
use std::fs;

use crate::formatters::supports_unicode;

pub const ENV_CONFIG: &str = "POKERSCHOOL_CONFIG";
pub const ENV_SEED: &str = "POKERSCHOOL_SEED";
pub const ENV_UNICODE: &str = "POKERSCHOOL_UNICODE";
pub const ENV_LOG: &str = "POKERSCHOOL_LOG";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Seed for `deal` when `--seed` is not given
    pub seed: Option<u64>,
    /// Print suit symbols (♠) instead of letters (s)
    pub unicode: bool,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub unicode: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            unicode: ValueSource::Default,
            log_level: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            unicode: supports_unicode(),
            log_level: "warn".into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Resolves configuration: defaults, then the TOML file named by
/// `POKERSCHOOL_CONFIG`, then individual environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.unicode {
            cfg.unicode = v;
            sources.unicode = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(uni) = std::env::var(ENV_UNICODE)
        && !uni.is_empty()
    {
        cfg.unicode =
            parse_bool(&uni).ok_or_else(|| ConfigError::Invalid("Invalid unicode".into()))?;
        sources.unicode = ValueSource::Env;
    }
    if let Ok(level) = std::env::var(ENV_LOG)
        && !level.is_empty()
    {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }

    cfg.log_level = cfg.log_level.to_ascii_lowercase();
    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    unicode: Option<bool>,
    #[serde(default)]
    log_level: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !LOG_LEVELS.contains(&cfg.log_level.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
