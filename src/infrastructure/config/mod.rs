//! Configuration management infrastructure
//!
//! YAML configuration loaded through figment:
//! - Config path resolution (flag, env var, default)
//! - File existence check
//! - Type-safe extraction and validation

pub mod loader;
pub mod path;

pub use loader::{ConfigError, ConfigLoader};
pub use path::{
    ConfigPathArgs, ConfigPathFlag, PathSource, CONFIG_FLAG, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH,
};
