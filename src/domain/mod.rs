//! Domain layer: the settings record handed to the rest of the service.

pub mod models;
