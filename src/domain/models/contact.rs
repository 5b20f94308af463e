//! Freshdesk contact domain model and the profile → contact field mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::profile::GithubProfile;

/// Freshdesk-assigned contact id.
///
/// Created once by the create call and referenced, never recreated, by
/// subsequent updates for the same join key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Contact body sent to the Freshdesk contacts endpoint.
///
/// Freshdesk requires a `name` plus at least one of `unique_external_id`,
/// `email`, `phone`, `mobile` or `twitter_id`. GitHub never supplies phone
/// numbers and may omit email and the Twitter handle, so the always-present
/// GitHub user id serves as `unique_external_id`.
///
/// Absent optional source fields are omitted from the serialized body
/// rather than sent as empty strings; `description` is the one exception
/// and is `""` when every fragment is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Postal address, taken from the profile location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Stringified GitHub user id. Stable join key; never changes across
    /// updates.
    pub unique_external_id: String,
    /// Free-text summary assembled from bio, blog and profile URL.
    pub description: String,
    /// Public email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name, falling back to the login handle.
    pub name: String,
    /// Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
}

impl ContactPayload {
    /// Map a GitHub profile to a Freshdesk contact body.
    ///
    /// Pure: the same profile always yields the same payload.
    pub fn from_profile(profile: &GithubProfile) -> Self {
        Self {
            address: profile.location.clone(),
            unique_external_id: profile.external_id(),
            description: describe(profile),
            email: profile.email.clone(),
            name: non_empty(&profile.name)
                .unwrap_or(&profile.login)
                .to_string(),
            twitter_id: profile.twitter_username.clone(),
        }
    }
}

/// Assemble the contact description from the optional profile fragments.
///
/// Fragment order is fixed: bio, blog, profile URL. Each fragment carries
/// its label and trailing separator verbatim; absent or empty source fields
/// contribute nothing, label included.
fn describe(profile: &GithubProfile) -> String {
    let mut description = String::new();
    if let Some(bio) = non_empty(&profile.bio) {
        description.push_str(&format!("Bio: {bio}, "));
    }
    if let Some(blog) = non_empty(&profile.blog) {
        description.push_str(&format!("Blog: {blog}, "));
    }
    if let Some(url) = non_empty(&profile.html_url) {
        description.push_str(&format!("Github profile: {url}"));
    }
    description
}

fn non_empty(field: &Option<String>) -> Option<&String> {
    field.as_ref().filter(|value| !value.is_empty())
}
