//! Configuration infrastructure.

pub mod loader;

pub use loader::ConfigLoader;
