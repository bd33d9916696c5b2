//! Output formatting utilities for the CLI.

use serde::Serialize;

use crate::domain::models::Config;

/// Something a command prints, in human or JSON form
pub trait CommandOutput: Serialize {
    /// Text for a terminal
    fn to_human(&self) -> String;
    /// Machine-readable form for `--json`
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// The effective configuration as printed by `sso-config`
#[derive(Debug, Serialize)]
pub struct ConfigOutput<'a> {
    /// Path the config was read from
    pub config_path: String,
    /// The loaded settings
    pub config: &'a Config,
}

impl CommandOutput for ConfigOutput<'_> {
    fn to_human(&self) -> String {
        let body = serde_yaml::to_string(self.config).unwrap_or_default();
        format!("# loaded from {}\n{}", self.config_path, body.trim_end())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
