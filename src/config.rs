use eyre::{Result, WrapErr};
use rcard::GradingPolicy;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG: &str = "rcard.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub grading: GradingPolicy,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })?;
        Self::parse(&content)
            .wrap_err_with(|| format!("invalid configuration file {}", file_name.display()))
    }

    /// Load the given configuration file, or `rcard.toml` if it exists. Only
    /// an explicitly named file is required to exist.
    pub fn load_or_default(file_name: Option<&Path>) -> Result<Config> {
        match file_name {
            Some(file_name) => Self::load(file_name),
            None if Path::new(DEFAULT_CONFIG).exists() => Self::load(Path::new(DEFAULT_CONFIG)),
            None => {
                debug!("no {DEFAULT_CONFIG} found, using default grading policy");
                Ok(Config::default())
            }
        }
    }

    pub fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).wrap_err("cannot parse configuration")?;
        config.grading.check()?;
        Ok(config)
    }
}
