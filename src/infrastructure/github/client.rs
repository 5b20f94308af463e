//! GitHub users API client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::GithubProfile;
use crate::domain::ports::ProfileSource;
use crate::infrastructure::http::{log_error_body, log_response_errors};

// GitHub rejects requests that carry no User-Agent.
const USER_AGENT: &str = concat!("freshdesk-contact/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub user-by-login endpoint.
pub struct GithubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    /// Create a client against `base_url` (production: `https://api.github.com`),
    /// authenticating with `token` as a bearer credential.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> SyncResult<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl ProfileSource for GithubClient {
    async fn fetch_profile(&self, login: &str) -> SyncResult<Option<GithubProfile>> {
        let url = format!("{}/users/{}", self.base_url, login);
        debug!(%url, "fetching GitHub user");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            log_response_errors(response, "GitHub user not found").await;
            return Ok(None);
        }

        // Other non-success statuses still carry a usable body on occasion;
        // the body decides. A body that does not decode as a profile is the
        // failure.
        let status = response.status();
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(profile) => {
                debug!(login, "GitHub user fetched");
                Ok(Some(profile))
            }
            Err(source) => {
                log_error_body(status, &body, "GitHub user data could not be decoded");
                Err(SyncError::Decode {
                    context: "GitHub users endpoint",
                    source,
                })
            }
        }
    }
}
