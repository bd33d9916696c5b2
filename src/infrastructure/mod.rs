//! Infrastructure layer module
//!
//! - Configuration loading
//! - Logging infrastructure

pub mod config;
pub mod logging;
