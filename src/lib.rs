//! sso-config - configuration loading for the SSO service
//!
//! Resolves the config file path (`--config` flag, then `CONFIG_PATH`, then
//! `config/config.yml`), checks that the file exists and extracts it into a
//! typed [`Config`].
//!
//! # Example
//!
//! ```no_run
//! use sso_config::ConfigLoader;
//!
//! // Exits the process with a message if the config cannot be loaded
//! let config = ConfigLoader::must_load();
//! println!("gRPC port: {}", config.grpc.port);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use domain::models::{Config, GrpcConfig};
pub use infrastructure::config::{
    ConfigError, ConfigLoader, ConfigPathArgs, ConfigPathFlag, PathSource, CONFIG_PATH_ENV,
    DEFAULT_CONFIG_PATH,
};
