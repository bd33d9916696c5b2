//! Config file path resolution
//!
//! Priority: `--config` flag > `CONFIG_PATH` env var > [`DEFAULT_CONFIG_PATH`].
//! The env var is only consulted when the flag did not appear on the command
//! line; an explicit flag wins even when it repeats the default value.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use clap::parser::ValueSource;
use clap::{ArgMatches, Args, Command};

/// Path used when neither the flag nor the env var provides one
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yml";

/// Environment variable holding the config path
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Name of the command-line flag
pub const CONFIG_FLAG: &str = "config";

/// The `--config` flag, ready to be flattened into a binary's own parser
#[derive(Args, Debug, Clone)]
pub struct ConfigPathArgs {
    /// Path to the config file (falls back to $CONFIG_PATH, then config/config.yml)
    #[arg(long = CONFIG_FLAG, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Where a resolved path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// `--config` on the command line
    Flag,
    /// `CONFIG_PATH`
    Env,
    /// [`DEFAULT_CONFIG_PATH`]
    Default,
}

/// Value of the `--config` flag and whether the user actually passed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPathFlag {
    value: PathBuf,
    explicit: bool,
}

impl Default for ConfigPathFlag {
    fn default() -> Self {
        Self {
            value: PathBuf::from(DEFAULT_CONFIG_PATH),
            explicit: false,
        }
    }
}

impl ConfigPathFlag {
    /// A flag given on the command line
    pub fn explicit(value: impl Into<PathBuf>) -> Self {
        Self {
            value: value.into(),
            explicit: true,
        }
    }

    /// Read the flag out of matches produced by a parser that includes [`ConfigPathArgs`]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let explicit = matches.value_source(CONFIG_FLAG) == Some(ValueSource::CommandLine);
        let value = matches
            .get_one::<PathBuf>(CONFIG_FLAG)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self { value, explicit }
    }

    /// Parse the flag from a full argument list (binary name first).
    ///
    /// Builds a fresh parser on every call, so it can be invoked repeatedly.
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let command = ConfigPathArgs::augment_args(
            Command::new("config-path")
                .disable_help_flag(true)
                .disable_version_flag(true),
        );
        let normalized = normalize_args(&command, args);
        let matches = command.try_get_matches_from(normalized)?;
        Ok(Self::from_matches(&matches))
    }

    /// Flag value, the default path when not given
    pub fn value(&self) -> &Path {
        &self.value
    }

    /// Whether the flag appeared on the command line
    pub const fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Resolve against an env var value
    pub fn resolve(&self, env_value: Option<&OsStr>) -> (PathBuf, PathSource) {
        if self.explicit {
            return (self.value.clone(), PathSource::Flag);
        }
        match env_value {
            Some(env) if !env.is_empty() => (PathBuf::from(env), PathSource::Env),
            _ => (self.value.clone(), PathSource::Default),
        }
    }

    /// Resolve against the process environment
    pub fn resolve_from_env(&self) -> (PathBuf, PathSource) {
        self.resolve(std::env::var_os(CONFIG_PATH_ENV).as_deref())
    }
}

/// Rewrite the single-dash spelling `-config` into `--config` so both forms parse.
///
/// Values of `command`'s value-taking flags and everything after `--` pass
/// through untouched.
pub fn normalize_args<I, T>(command: &Command, args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let single = format!("-{CONFIG_FLAG}");
    let single_eq = format!("-{CONFIG_FLAG}=");
    let value_flags: Vec<String> = command
        .get_arguments()
        .filter(|arg| arg.get_action().takes_values())
        .flat_map(|arg| {
            arg.get_long()
                .map(|long| format!("--{long}"))
                .into_iter()
                .chain(arg.get_short().map(|short| format!("-{short}")))
        })
        .collect();

    let mut args = args.into_iter().map(Into::into);
    let mut normalized = Vec::new();
    let mut expecting_value = false;

    while let Some(arg) = args.next() {
        if expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("--") => {
                normalized.push(arg);
                normalized.extend(args.by_ref());
                break;
            }
            Some(s) if s == single || s.starts_with(&single_eq) => {
                expecting_value = s == single;
                normalized.push(OsString::from(format!("-{s}")));
            }
            Some(s) => {
                expecting_value = value_flags.iter().any(|flag| flag == s);
                normalized.push(arg);
            }
            None => normalized.push(arg),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flag_uses_default_path() {
        let flag = ConfigPathFlag::parse_from(["sso"]).unwrap();
        assert!(!flag.is_explicit());

        let (path, source) = flag.resolve(None);
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(source, PathSource::Default);
    }

    #[test]
    fn test_explicit_flag_beats_env() {
        let flag = ConfigPathFlag::parse_from(["sso", "--config", "./local.yml"]).unwrap();
        let (path, source) = flag.resolve(Some(OsStr::new("/etc/sso/prod.yml")));
        assert_eq!(path, PathBuf::from("./local.yml"));
        assert_eq!(source, PathSource::Flag);
    }

    #[test]
    fn test_explicit_default_value_still_beats_env() {
        let flag = ConfigPathFlag::parse_from(["sso", "--config", DEFAULT_CONFIG_PATH]).unwrap();
        assert!(flag.is_explicit());

        let (path, source) = flag.resolve(Some(OsStr::new("/etc/sso/prod.yml")));
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(source, PathSource::Flag);
    }

    #[test]
    fn test_env_used_when_flag_absent() {
        let flag = ConfigPathFlag::default();
        let (path, source) = flag.resolve(Some(OsStr::new("/etc/sso/prod.yml")));
        assert_eq!(path, PathBuf::from("/etc/sso/prod.yml"));
        assert_eq!(source, PathSource::Env);
    }

    #[test]
    fn test_empty_env_ignored() {
        let (path, source) = ConfigPathFlag::default().resolve(Some(OsStr::new("")));
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(source, PathSource::Default);
    }

    #[test]
    fn test_single_dash_spelling() {
        let flag = ConfigPathFlag::parse_from(["sso", "-config", "a.yml"]).unwrap();
        assert_eq!(flag, ConfigPathFlag::explicit("a.yml"));

        let flag = ConfigPathFlag::parse_from(["sso", "-config=b.yml"]).unwrap();
        assert_eq!(flag, ConfigPathFlag::explicit("b.yml"));

        let flag = ConfigPathFlag::parse_from(["sso", "--config=c.yml"]).unwrap();
        assert_eq!(flag, ConfigPathFlag::explicit("c.yml"));
    }

    #[test]
    fn test_repeated_parsing() {
        for _ in 0..3 {
            assert!(ConfigPathFlag::parse_from(["sso", "--config", "x.yml"]).is_ok());
        }
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(ConfigPathFlag::parse_from(["sso", "--port", "8080"]).is_err());
    }

    fn command_with_value_flag() -> Command {
        ConfigPathArgs::augment_args(Command::new("sso"))
            .arg(clap::Arg::new("migrations-path").long("migrations-path"))
    }

    #[test]
    fn test_normalize_leaves_other_args_alone() {
        let command = command_with_value_flag();
        let args = normalize_args(&command, ["sso", "-c", "--config", "-configuration", "x"]);
        assert_eq!(args, vec!["sso", "-c", "--config", "-configuration", "x"]);
    }

    #[test]
    fn test_normalize_skips_flag_values_and_trailing_args() {
        let command = command_with_value_flag();
        let args = normalize_args(
            &command,
            ["sso", "--migrations-path", "-config", "--", "-config"],
        );
        assert_eq!(args, vec!["sso", "--migrations-path", "-config", "--", "-config"]);

        let args = normalize_args(&command, ["sso", "-config", "-config", "--migrations-path", "m"]);
        assert_eq!(args, vec!["sso", "--config", "-config", "--migrations-path", "m"]);
    }

    #[test]
    fn test_resolve_from_process_env() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/from/env.yml"), || {
            let (path, source) = ConfigPathFlag::default().resolve_from_env();
            assert_eq!(path, PathBuf::from("/from/env.yml"));
            assert_eq!(source, PathSource::Env);
        });
        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            let (path, _) = ConfigPathFlag::default().resolve_from_env();
            assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
        });
    }
}
