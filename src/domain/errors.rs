//! Domain errors for the synchronization pipeline.
//!
//! Recoverable conditions ("user not found", "no matching contact") are not
//! errors: the ports model them as `Ok(None)` and the service as typed
//! outcomes. An error here means the run cannot continue.

use std::fmt;

use thiserror::Error;

/// The outbound write a failure occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// `POST` of a new contact.
    Create,
    /// `PUT` of an existing contact.
    Update,
    /// Permanent `DELETE` of an existing contact.
    Delete,
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Errors that abort a synchronization run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Transport-level failure (connection, timeout, malformed response
    /// where reqwest does the decoding).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body that had to parse did not.
    #[error("response from {context} was not valid JSON: {source}")]
    Decode {
        /// Which endpoint produced the body.
        context: &'static str,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The contact search itself failed (as opposed to matching nothing).
    /// Propagated rather than treated as "no existing contact" so a
    /// transient search failure cannot trigger a duplicate create.
    #[error("contact search failed with status {status}")]
    SearchFailed {
        /// HTTP status the search endpoint returned.
        status: u16,
    },

    /// A create, update or delete call was rejected.
    #[error("contact {action} failed with status {status}")]
    WriteFailed {
        /// Which write was rejected.
        action: WriteAction,
        /// HTTP status the endpoint returned.
        status: u16,
    },
}

/// Result alias for pipeline operations.
pub type SyncResult<T> = Result<T, SyncError>;
