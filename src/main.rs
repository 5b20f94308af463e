//! Freshdesk contact CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use freshdesk_contact::cli::{self, Cli};

#[tokio::main]
async fn main() {
    // Logging is configured once here, at the composition root; everything
    // downstream logs through the `tracing` macros.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // A missing argument is a fatal configuration error: clap reports it
    // and exits non-zero before any network activity.
    let cli = Cli::parse();

    if let Err(err) = cli::run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
