//! Loading config files through the public API.

use sso_config::{ConfigError, ConfigLoader, ConfigPathFlag, CONFIG_PATH_ENV};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_spec_example_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(
        &path,
        "env: prod\nstorage_path: /data/db\ngrpc:\n  port: 50051\n  timeout: 5s\n",
    )
    .unwrap();

    let config = ConfigLoader::load_with(&ConfigPathFlag::explicit(&path)).unwrap();

    assert_eq!(config.env, "prod");
    assert_eq!(config.storage_path, "/data/db");
    assert_eq!(config.grpc.port, 50051);
    assert_eq!(config.grpc.timeout, Duration::from_secs(5));
    assert_eq!(config.token_ttl, Duration::from_secs(3600));
}

#[test]
fn test_all_fields_populated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(
        &path,
        r"
env: dev
storage_path: ./storage/sso.db
grpc:
  port: 44044
  timeout: 10h
token_ttl: 1h
",
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();

    assert_eq!(config.env, "dev");
    assert_eq!(config.storage_path, "./storage/sso.db");
    assert_eq!(config.grpc.port, 44044);
    assert_eq!(config.grpc.timeout, Duration::from_secs(36_000));
    assert_eq!(config.token_ttl.as_secs(), 3600);
}

#[test]
fn test_env_path_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yml");

    temp_env::with_var(CONFIG_PATH_ENV, Some(missing.as_os_str()), || {
        let err = ConfigLoader::load_with(&ConfigPathFlag::default()).unwrap_err();
        match err {
            ConfigError::FileNotFound { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    });
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(&path, "storage_path: /data/db\ngrpc:\n  port: not-a-port\n").unwrap();

    let err = ConfigLoader::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(std::error::Error::source(&err).is_some());
}
