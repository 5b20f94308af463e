//! GitHub profile domain model.
//!
//! The profile is the source of truth for contact fields. It exists only
//! transiently during one synchronization run: fetched, mapped, discarded.

use serde::{Deserialize, Serialize};

/// A GitHub user profile, as returned by the users endpoint.
///
/// Only the fields the contact mapping consumes are modeled; the numeric
/// `id` is the join key between GitHub and Freshdesk and is always present.
/// GitHub reports cleared optional fields either as `null` or as an empty
/// string (e.g. `blog`), so "present" downstream means `Some` and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubProfile {
    /// Numeric user id, unique per GitHub account. Join key.
    pub id: u64,
    /// Login handle, always present. Fallback for a missing display name.
    pub login: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Public email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-text biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Blog URL. GitHub sends `""` when unset.
    #[serde(default)]
    pub blog: Option<String>,
    /// URL of the user's GitHub profile page.
    #[serde(default)]
    pub html_url: Option<String>,
    /// Free-text location.
    #[serde(default)]
    pub location: Option<String>,
    /// Twitter handle.
    #[serde(default)]
    pub twitter_username: Option<String>,
}

impl GithubProfile {
    /// The profile's id in the string form Freshdesk stores as
    /// `unique_external_id`.
    pub fn external_id(&self) -> String {
        self.id.to_string()
    }
}
