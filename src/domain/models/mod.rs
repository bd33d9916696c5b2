pub mod config;
pub mod duration;

pub use config::{Config, GrpcConfig};
