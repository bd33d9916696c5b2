use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the SSO service, read once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Environment name: local, dev, prod
    #[serde(default = "default_env")]
    pub env: String,

    /// Path to the storage file. Required, must not be empty.
    pub storage_path: String,

    /// gRPC server settings
    #[serde(default)]
    pub grpc: GrpcConfig,

    /// Location of schema migrations. Never read from the file.
    #[serde(skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub migrations_path: String,

    /// Lifetime of issued tokens
    #[serde(default = "default_token_ttl", with = "super::duration")]
    pub token_ttl: Duration,
}

fn default_env() -> String {
    "local".to_string()
}

const fn default_token_ttl() -> Duration {
    Duration::from_secs(60 * 60)
}

impl Config {
    /// Build a config for the given storage path with every other field defaulted
    pub fn new(storage_path: impl Into<String>) -> Self {
        Self {
            env: default_env(),
            storage_path: storage_path.into(),
            grpc: GrpcConfig::default(),
            migrations_path: String::new(),
            token_ttl: default_token_ttl(),
        }
    }

    /// Replace zero-valued defaulted fields (`env: ""`, `token_ttl: 0s`) with their defaults
    pub fn fill_zero_defaults(&mut self) {
        if self.env.is_empty() {
            self.env = default_env();
        }
        if self.token_ttl.is_zero() {
            self.token_ttl = default_token_ttl();
        }
    }

    /// Attach the migrations location supplied by the caller
    #[must_use]
    pub fn with_migrations_path(mut self, path: impl Into<String>) -> Self {
        self.migrations_path = path.into();
        self
    }
}

/// gRPC server configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GrpcConfig {
    /// Listen port, 0 when unset
    #[serde(default)]
    pub port: u16,

    /// Per-request timeout
    #[serde(default, with = "super::duration")]
    pub timeout: Duration,
}
