//! Freshdesk adapter.

pub mod client;

pub use client::{contacts_endpoint, FreshdeskClient};
