use certmap_loadbalancer::{ErrorKind, LoadBalancerClientError};
use thiserror::Error;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the HTTP load balancer client.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request failed.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The mapping listing body was not valid JSON.
    #[error("malformed mapping listing: {0}")]
    MalformedListing(#[from] serde_json::Error),

    /// No load balancer with the given id in this region/account.
    #[error("no load balancer was found with id {id}")]
    NotFound {
        /// The unresolved load balancer id.
        id: String,
    },

    /// The API returned a status the call does not handle.
    #[error("load balancer API returned status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status of the response.
        status: u16,

        /// Raw response body.
        body: String,
    },
}

impl LoadBalancerClientError for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::Other,
        }
    }
}
