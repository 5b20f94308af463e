//! Infrastructure layer: adapters over the two upstream HTTP APIs and the
//! process environment.

pub mod config;
pub mod freshdesk;
pub mod github;
pub mod http;
