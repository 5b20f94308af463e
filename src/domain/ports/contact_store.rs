//! Port for the helpdesk contact store.

use async_trait::async_trait;

use crate::domain::errors::SyncResult;
use crate::domain::models::{ContactId, ContactPayload};

/// Read/write access to the helpdesk's contact records.
///
/// Every method maps to exactly one outbound request; no retries, no
/// client-side pagination.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Find the contact whose `unique_external_id` equals `external_id`.
    ///
    /// Yields the first element of the server-returned sequence when the
    /// search matches, `Ok(None)` when it matches nothing (empty result or
    /// the store's not-found status), and `SyncError::SearchFailed` when
    /// the search call itself fails.
    async fn find_by_external_id(&self, external_id: &str) -> SyncResult<Option<ContactId>>;

    /// Create a new contact and return its store-assigned id.
    async fn create(&self, payload: &ContactPayload) -> SyncResult<ContactId>;

    /// Overwrite the contact addressed by `id` with `payload`.
    async fn update(&self, id: ContactId, payload: &ContactPayload) -> SyncResult<()>;

    /// Permanently delete the contact addressed by `id`. Irreversible; the
    /// same external id may later be recreated under a fresh contact id.
    async fn hard_delete(&self, id: ContactId) -> SyncResult<()>;
}
