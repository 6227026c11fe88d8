use certmap_identity::IdentityServiceError;
use thiserror::Error;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the HTTP identity service.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request failed.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The response body did not carry the expected token field.
    #[error("malformed identity response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The identity service rejected the exchange.
    #[error("identity exchange returned status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status of the response.
        status: u16,

        /// Raw response body.
        body: String,
    },
}

impl IdentityServiceError for Error {}
