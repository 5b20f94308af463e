//! Synchronizer: orchestrates one create-or-update (or delete) run.
//!
//! Control flows strictly downward: fetch → locate → write. No retries, no
//! branching back, at most three sequential outbound requests per run.

use tracing::{error, info};

use crate::domain::errors::SyncResult;
use crate::domain::models::{ContactId, ContactPayload};
use crate::domain::ports::{ContactStore, ProfileSource};

/// Terminal state of a create-or-update run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No contact existed for the join key; one was created.
    Created(ContactId),
    /// An existing contact was located and overwritten.
    Updated(ContactId),
    /// The identity provider does not know the login; no write performed.
    ProfileNotFound,
}

/// Terminal state of a delete run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The located contact was permanently removed.
    Deleted(ContactId),
    /// Nothing to delete: unknown login or no matching contact.
    Absent,
}

/// Drives the fetch → locate → write pipeline over injected ports.
pub struct Synchronizer<P, C> {
    profiles: P,
    contacts: C,
}

impl<P: ProfileSource, C: ContactStore> Synchronizer<P, C> {
    /// Create a synchronizer over a profile source and a contact store.
    pub fn new(profiles: P, contacts: C) -> Self {
        Self { profiles, contacts }
    }

    /// Synchronize one login: create the contact when the join key is new,
    /// update it when a contact already carries the key.
    pub async fn sync(&self, login: &str) -> SyncResult<SyncOutcome> {
        let Some(profile) = self.profiles.fetch_profile(login).await? else {
            error!(login, "no GitHub user to synchronize");
            return Ok(SyncOutcome::ProfileNotFound);
        };

        let payload = ContactPayload::from_profile(&profile);

        match self.contacts.find_by_external_id(&payload.unique_external_id).await? {
            Some(contact_id) => {
                self.contacts.update(contact_id, &payload).await?;
                info!(login, %contact_id, "Freshdesk contact updated");
                Ok(SyncOutcome::Updated(contact_id))
            }
            None => {
                let contact_id = self.contacts.create(&payload).await?;
                info!(login, %contact_id, "Freshdesk contact created");
                Ok(SyncOutcome::Created(contact_id))
            }
        }
    }

    /// Permanently delete the contact synchronized from `login`, if any.
    pub async fn delete(&self, login: &str) -> SyncResult<DeleteOutcome> {
        let Some(profile) = self.profiles.fetch_profile(login).await? else {
            error!(login, "no GitHub user, nothing to delete");
            return Ok(DeleteOutcome::Absent);
        };

        let Some(contact_id) =
            self.contacts.find_by_external_id(&profile.external_id()).await?
        else {
            info!(login, "no Freshdesk contact exists for this GitHub user");
            return Ok(DeleteOutcome::Absent);
        };

        self.contacts.hard_delete(contact_id).await?;
        info!(login, %contact_id, "Freshdesk contact deleted");
        Ok(DeleteOutcome::Deleted(contact_id))
    }
}
