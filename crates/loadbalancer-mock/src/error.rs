use certmap_loadbalancer::{ErrorKind, LoadBalancerClientError};
use thiserror::Error;

/// Error type for the mock load balancer client.
#[derive(Debug, Error)]
pub enum Error {
    /// No load balancer with the given id is registered with the mock.
    #[error("no load balancer was found with id {0}")]
    NotFound(String),
}

impl LoadBalancerClientError for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
