//! Configuration loading.

use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;

use crate::domain::models::Config;

/// Environment variables the loader reads.
const ENV_KEYS: &[&str] = &["GITHUB_TOKEN", "FRESHDESK_TOKEN", "GITHUB_API_BASE"];

/// Loads the immutable startup [`Config`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (empty credentials, production GitHub base)
    /// 2. Environment variables (`GITHUB_TOKEN`, `FRESHDESK_TOKEN`,
    ///    `GITHUB_API_BASE`)
    ///
    /// Missing credentials are not an error here; the affected request
    /// fails at the HTTP layer instead.
    pub fn load() -> Result<Config> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(ENV_KEYS))
            .extract()
            .context("Failed to extract configuration from environment")
    }
}
