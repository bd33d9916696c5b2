//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber, with the
//! format and level picked from the deployment environment.

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::{bootstrap, init};
