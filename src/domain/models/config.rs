//! Startup configuration.

use serde::{Deserialize, Serialize};

/// Production GitHub REST API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Immutable configuration read once at startup.
///
/// Credentials come from the process environment (`GITHUB_TOKEN`,
/// `FRESHDESK_TOKEN`). Their absence is deliberately not validated here:
/// requests proceed and fail at the HTTP layer, matching the upstream APIs'
/// own behavior for missing or invalid credentials. The GitHub base URL can
/// be overridden (`GITHUB_API_BASE`) for tests and proxies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API token, sent as a bearer credential.
    pub github_token: String,
    /// Freshdesk API token, sent as the basic-auth username with an empty
    /// password (vendor convention).
    pub freshdesk_token: String,
    /// GitHub REST API base URL.
    pub github_api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: String::new(),
            freshdesk_token: String::new(),
            github_api_base: GITHUB_API_BASE.to_string(),
        }
    }
}
