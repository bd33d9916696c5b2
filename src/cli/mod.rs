//! Command-line interface for `sso-config`.

pub mod output;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::infrastructure::config::path::{normalize_args, ConfigPathArgs, ConfigPathFlag};

/// Load the SSO service configuration and print the effective settings
#[derive(Parser, Debug)]
#[command(name = "sso-config", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigPathArgs,

    /// Directory holding schema migrations, attached to the loaded config
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub migrations_path: Option<String>,

    /// Print JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse arguments, keeping track of whether `--config` was given explicitly
    pub fn try_parse_with_flag<I, T>(args: I) -> Result<(Self, ConfigPathFlag), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString>,
    {
        let command = Self::command();
        let normalized = normalize_args(&command, args);
        let matches = command.try_get_matches_from(normalized)?;
        let cli = Self::from_arg_matches(&matches)?;
        let flag = ConfigPathFlag::from_matches(&matches);
        Ok((cli, flag))
    }
}
