//! Domain models.

pub mod config;
pub mod contact;
pub mod profile;

pub use config::Config;
pub use contact::{ContactId, ContactPayload};
pub use profile::GithubProfile;
