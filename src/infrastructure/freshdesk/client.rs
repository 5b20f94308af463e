//! Freshdesk contacts API client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::domain::errors::{SyncError, SyncResult, WriteAction};
use crate::domain::models::{ContactId, ContactPayload};
use crate::domain::ports::ContactStore;
use crate::infrastructure::http::log_response_errors;

/// Contacts collection endpoint for a Freshdesk subdomain.
pub fn contacts_endpoint(subdomain: &str) -> String {
    format!("https://{subdomain}.freshdesk.com/api/v2/contacts")
}

/// Client for the Freshdesk contacts API.
///
/// Freshdesk expects the API token as the basic-auth username with an empty
/// password; that vendor convention is preserved verbatim.
pub struct FreshdeskClient {
    http: Client,
    base_url: String,
    token: String,
}

/// The slice of a contact record the pipeline reads back.
#[derive(Debug, Deserialize)]
struct ContactSummary {
    id: ContactId,
}

impl FreshdeskClient {
    /// Create a client against `base_url`, the contacts collection endpoint
    /// (see [`contacts_endpoint`]).
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> SyncResult<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    fn contact_url(&self, id: ContactId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl ContactStore for FreshdeskClient {
    async fn find_by_external_id(&self, external_id: &str) -> SyncResult<Option<ContactId>> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("unique_external_id", external_id)])
            .basic_auth(&self.token, Some(""))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // The filter matched nothing; not a failure of the search itself.
            log_response_errors(response, "no Freshdesk contact matches the external id").await;
            return Ok(None);
        }
        if !status.is_success() {
            let status = log_response_errors(response, "Freshdesk contact search failed").await;
            return Err(SyncError::SearchFailed {
                status: status.as_u16(),
            });
        }

        let matches: Vec<ContactSummary> = response.json().await?;
        // First element of the server-returned sequence, no reordering.
        Ok(matches.first().map(|contact| contact.id))
    }

    async fn create(&self, payload: &ContactPayload) -> SyncResult<ContactId> {
        let response = self
            .http
            .post(&self.base_url)
            .basic_auth(&self.token, Some(""))
            .json(payload)
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            let status =
                log_response_errors(response, "Freshdesk contact could not be created").await;
            return Err(SyncError::WriteFailed {
                action: WriteAction::Create,
                status: status.as_u16(),
            });
        }

        let created: ContactSummary = response.json().await?;
        debug!(contact_id = %created.id, "Freshdesk contact successfully created");
        Ok(created.id)
    }

    async fn update(&self, id: ContactId, payload: &ContactPayload) -> SyncResult<()> {
        let response = self
            .http
            .put(&self.contact_url(id))
            .basic_auth(&self.token, Some(""))
            .json(payload)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let status =
                log_response_errors(response, "Freshdesk contact could not be updated").await;
            return Err(SyncError::WriteFailed {
                action: WriteAction::Update,
                status: status.as_u16(),
            });
        }

        debug!(contact_id = %id, "Freshdesk contact successfully updated");
        Ok(())
    }

    async fn hard_delete(&self, id: ContactId) -> SyncResult<()> {
        let response = self
            .http
            .delete(format!("{}/hard_delete", self.contact_url(id)))
            .query(&[("force", "true")])
            .basic_auth(&self.token, Some(""))
            .send()
            .await?;

        if response.status() != StatusCode::NO_CONTENT {
            let status =
                log_response_errors(response, "Freshdesk contact could not be deleted").await;
            return Err(SyncError::WriteFailed {
                action: WriteAction::Delete,
                status: status.as_u16(),
            });
        }

        debug!(contact_id = %id, "Freshdesk contact permanently deleted");
        Ok(())
    }
}
