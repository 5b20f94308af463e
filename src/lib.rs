//! Freshdesk Contact - GitHub profile → Freshdesk contact synchronizer.
//!
//! Looks up a GitHub user by login, maps selected profile fields into the
//! Freshdesk contact schema, and creates or updates the contact keyed by
//! the GitHub numeric user id stored as the contact's
//! `unique_external_id`. A deletion path permanently removes a contact by
//! the same key.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, ports and error types
//! - **Service Layer** (`services`): the fetch → locate → write pipeline
//! - **Infrastructure Layer** (`infrastructure`): GitHub and Freshdesk
//!   HTTP adapters, configuration loading
//! - **CLI Layer** (`cli`): command-line interface and composition root
//!
//! # Example
//!
//! ```no_run
//! use freshdesk_contact::infrastructure::freshdesk::contacts_endpoint;
//! use freshdesk_contact::{FreshdeskClient, GithubClient, Synchronizer};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let github = GithubClient::new("https://api.github.com", "gh-token")?;
//! let freshdesk = FreshdeskClient::new(contacts_endpoint("wayne"), "fd-token")?;
//!
//! let synchronizer = Synchronizer::new(github, freshdesk);
//! let outcome = synchronizer.sync("batman").await?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{SyncError, SyncResult, WriteAction};
pub use domain::models::{Config, ContactId, ContactPayload, GithubProfile};
pub use domain::ports::{ContactStore, ProfileSource};
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::freshdesk::FreshdeskClient;
pub use infrastructure::github::GithubClient;
pub use services::{DeleteOutcome, SyncOutcome, Synchronizer};
