use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default = "default_format")]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line human-readable output
    Pretty,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
        }
    }
}

impl LogConfig {
    /// Logging setup for a deployment environment name (`Config::env`)
    pub fn for_env(env: &str) -> Self {
        match env {
            "local" => Self {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
            },
            "dev" => Self {
                level: "debug".to_string(),
                format: LogFormat::Json,
            },
            _ => Self::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_format() -> LogFormat {
    LogFormat::Json
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_env() {
        assert_eq!(LogConfig::for_env("local").format, LogFormat::Pretty);
        assert_eq!(LogConfig::for_env("local").level, "debug");
        assert_eq!(LogConfig::for_env("dev").format, LogFormat::Json);
        assert_eq!(LogConfig::for_env("dev").level, "debug");
        assert_eq!(LogConfig::for_env("prod"), LogConfig::default());
        assert_eq!(LogConfig::for_env("staging"), LogConfig::default());
    }
}
