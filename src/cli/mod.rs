//! Command-line interface and composition root.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::freshdesk::{contacts_endpoint, FreshdeskClient};
use crate::infrastructure::github::GithubClient;
use crate::services::Synchronizer;

/// Sync a GitHub user profile into a Freshdesk contact.
///
/// Credentials come from the `GITHUB_TOKEN` and `FRESHDESK_TOKEN`
/// environment variables.
#[derive(Debug, Parser)]
#[command(name = "freshdesk-contact", version, about)]
pub struct Cli {
    /// GitHub login of the user to synchronize
    #[arg(value_name = "GITHUB_USERNAME")]
    pub github_username: String,

    /// Freshdesk subdomain that receives the contact
    #[arg(value_name = "FRESHDESK_SUBDOMAIN")]
    pub freshdesk_subdomain: String,
}

/// Run one create-or-update pipeline for the parsed arguments.
///
/// HTTP-level failures are absorbed into the log trace and do not change
/// the exit code; only configuration problems propagate to the caller.
pub async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load()?;
    let synchronizer = build_synchronizer(&config, &cli.freshdesk_subdomain)?;

    if let Err(err) = synchronizer.sync(&cli.github_username).await {
        error!(
            login = %cli.github_username,
            error = %err,
            "synchronization failed"
        );
    }

    Ok(())
}

/// Wire the configured clients into a synchronizer.
fn build_synchronizer(
    config: &Config,
    subdomain: &str,
) -> Result<Synchronizer<GithubClient, FreshdeskClient>> {
    let github = GithubClient::new(&config.github_api_base, &config.github_token)
        .context("Failed to build the GitHub client")?;
    let freshdesk = FreshdeskClient::new(contacts_endpoint(subdomain), &config.freshdesk_token)
        .context("Failed to build the Freshdesk client")?;

    Ok(Synchronizer::new(github, freshdesk))
}
