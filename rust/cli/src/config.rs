use serde::{Deserialize, Serialize};
use slidepuzzle_engine::errors::BoardError;
use slidepuzzle_engine::rules::{BoardConfig, DEFAULT_SHUFFLE_MIN, DEFAULT_SIZE};
use std::fs;

pub const CONFIG_ENV: &str = "SLIDEPUZZLE_CONFIG";
pub const SIZE_ENV: &str = "SLIDEPUZZLE_SIZE";
pub const SHUFFLE_MIN_ENV: &str = "SLIDEPUZZLE_SHUFFLE_MIN";
pub const SEED_ENV: &str = "SLIDEPUZZLE_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub size: usize,
    pub shuffle_min: u32,
    pub seed: Option<u64>,
}

impl Config {
    /// Board parameters for this configuration, with command-line overrides applied.
    pub fn board_config(
        &self,
        size: Option<usize>,
        shuffle_min: Option<u32>,
    ) -> Result<BoardConfig, BoardError> {
        BoardConfig::new(
            size.unwrap_or(self.size),
            shuffle_min.unwrap_or(self.shuffle_min),
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub size: ValueSource,
    pub shuffle_min: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            size: ValueSource::Default,
            shuffle_min: ValueSource::Default,
            seed: ValueSource::Default,
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
            size: DEFAULT_SIZE,
            shuffle_min: DEFAULT_SHUFFLE_MIN,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Merged configuration values without board-limit checks. Callers apply their own
/// overrides and validate the result through [`Config::board_config`].
pub fn load() -> Result<Config, ConfigError> {
    merge().map(|resolved| resolved.config)
}

/// Resolves and validates the configuration: defaults, then the TOML file named by
/// `SLIDEPUZZLE_CONFIG`, then the individual environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let resolved = merge()?;
    validate(&resolved.config)?;
    Ok(resolved)
}

fn merge() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.size {
            cfg.size = v;
            sources.size = ValueSource::File;
        }
        if let Some(v) = f.shuffle_min {
            cfg.shuffle_min = v;
            sources.shuffle_min = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(size) = std::env::var(SIZE_ENV)
        && !size.is_empty()
    {
        cfg.size = size
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid size".into()))?;
        sources.size = ValueSource::Env;
    }
    if let Ok(min) = std::env::var(SHUFFLE_MIN_ENV)
        && !min.is_empty()
    {
        cfg.shuffle_min = min
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid shuffle_min".into()))?;
        sources.shuffle_min = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    size: Option<usize>,
    #[serde(default)]
    shuffle_min: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.board_config(None, None)
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}
