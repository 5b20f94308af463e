//! Service layer: pipeline orchestration.

pub mod sync_service;

pub use sync_service::{DeleteOutcome, SyncOutcome, Synchronizer};
