//! Error types for mirror node lookups.

use thiserror::Error;

/// Failure modes of a single mirror node lookup.
///
/// Not-found responses are not errors: lookup methods report those as `None`
/// (or an empty list) so that speculative queries stay silent. This type only
/// covers genuine transport and contract failures.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network-level failure from the HTTP client (timeout, DNS, TLS, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The mirror node answered with an unexpected status code.
    #[error("{entity} lookup failed with HTTP {status}")]
    Http {
        /// Entity kind being looked up (e.g. "account", "block").
        entity: &'static str,
        /// The offending status code.
        status: u16,
    },

    /// The response body could not be decoded into the expected schema.
    #[error("parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The HTTP client could not be initialized.
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl SearchError {
    /// Create a new HTTP status error.
    #[must_use]
    pub fn http(entity: &'static str, status: u16) -> Self {
        Self::Http { entity, status }
    }

    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
