//! Port for the identity provider.

use async_trait::async_trait;

use crate::domain::errors::SyncResult;
use crate::domain::models::GithubProfile;

/// Read access to the identity provider's user records.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile for `login`.
    ///
    /// Returns `Ok(None)` when the provider does not know the login; that
    /// outcome is recoverable and callers short-circuit the rest of the
    /// pipeline. One network round trip, no retries.
    async fn fetch_profile(&self, login: &str) -> SyncResult<Option<GithubProfile>>;
}
