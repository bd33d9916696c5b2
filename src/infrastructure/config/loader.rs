use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Yaml};
use thiserror::Error;
use tracing::{debug, error};

use super::path::ConfigPathFlag;
use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config path is empty")]
    PathResolution,

    #[error("Config file not found at {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: figment::Error,
    },

    #[error("Invalid command-line arguments: {0}")]
    InvalidArguments(#[from] clap::Error),
}

/// Loads the service configuration from a YAML file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration using the process arguments and `CONFIG_PATH`
    pub fn load() -> Result<Config, ConfigError> {
        let flag = ConfigPathFlag::parse_from(std::env::args_os())?;
        Self::load_with(&flag)
    }

    /// Load configuration using an already-parsed `--config` flag and `CONFIG_PATH`
    pub fn load_with(flag: &ConfigPathFlag) -> Result<Config, ConfigError> {
        let (path, source) = flag.resolve_from_env();
        debug!(path = %path.display(), ?source, "resolved config path");
        Self::load_from_path(path)
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::PathResolution);
        }

        // Yaml::file treats a missing file as empty, so check it up front
        std::fs::metadata(path).map_err(|source| ConfigError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = Figment::new()
            .merge(Yaml::file(path))
            .extract()
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.fill_zero_defaults();
        Self::validate(&config).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), env = %config.env, "config loaded");
        Ok(config)
    }

    /// Like [`ConfigLoader::load`], but terminates the process on failure
    pub fn must_load() -> Config {
        Self::load().unwrap_or_else(|err| terminate(&err))
    }

    /// Like [`ConfigLoader::load_with`], but terminates the process on failure
    pub fn must_load_with(flag: &ConfigPathFlag) -> Config {
        Self::load_with(flag).unwrap_or_else(|err| terminate(&err))
    }

    /// Checks that serde alone cannot express
    pub fn validate(config: &Config) -> Result<(), figment::Error> {
        if config.storage_path.is_empty() {
            return Err(<figment::Error as serde::de::Error>::missing_field(
                "storage_path",
            ));
        }
        Ok(())
    }
}

fn terminate(err: &ConfigError) -> ! {
    error!(error = %err, "failed to load config");
    eprintln!("fatal: {}", error_chain(err));
    std::process::exit(1);
}

/// Render an error with all of its sources, outermost first
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = cause.source();
    }
    message
}
