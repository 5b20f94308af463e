//! Shared fixtures for the pipeline integration tests.
//!
//! Each test drives a real `Synchronizer` against a single `mockito` server
//! that plays both upstream APIs: GitHub under `/users/…`, Freshdesk under
//! `/api/v2/contacts…`.

use freshdesk_contact::{FreshdeskClient, GithubClient, Synchronizer};

/// Bearer token the GitHub client sends in tests.
pub const GITHUB_AUTH: &str = "Bearer gh-test-token";

/// Basic-auth header for the Freshdesk token with an empty password
/// (`fd-test-token:`).
pub const FRESHDESK_AUTH: &str = "Basic ZmQtdGVzdC10b2tlbjo=";

/// Stringified join key of the fixture profile.
pub const BATMAN_EXTERNAL_ID: &str = "123456789";

/// The fixture GitHub profile from the update scenario.
pub fn batman_profile() -> serde_json::Value {
    serde_json::json!({
        "id": 123_456_789_u64,
        "login": "batman",
        "name": null,
        "location": "Gotham city, New Jersey",
        "blog": "https://batman.waynecorp.com",
        "html_url": "https://github.com/batman",
        "email": "batman@batcave.com",
        "twitter_username": "@batman",
    })
}

/// The contact body the mapper must produce for [`batman_profile`].
pub fn batman_contact_body() -> serde_json::Value {
    serde_json::json!({
        "address": "Gotham city, New Jersey",
        "unique_external_id": "123456789",
        "description": "Blog: https://batman.waynecorp.com, \
                        Github profile: https://github.com/batman",
        "email": "batman@batcave.com",
        "name": "batman",
        "twitter_id": "@batman",
    })
}

/// Wire a synchronizer whose two clients both point at `server_url`.
pub fn synchronizer(server_url: &str) -> Synchronizer<GithubClient, FreshdeskClient> {
    let github = GithubClient::new(server_url, "gh-test-token").unwrap();
    let freshdesk =
        FreshdeskClient::new(format!("{server_url}/api/v2/contacts"), "fd-test-token").unwrap();
    Synchronizer::new(github, freshdesk)
}
