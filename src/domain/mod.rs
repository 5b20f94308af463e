//! Domain layer: pure models, ports and error types.

pub mod errors;
pub mod models;
pub mod ports;
