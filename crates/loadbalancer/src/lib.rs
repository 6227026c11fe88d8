//! Abstract interface for the cloud load balancer API, scoped to the SSL
//! termination sub-resource and its certificate mappings.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod types;

pub use types::{CertificateMapping, CertificateMappingEnvelope, SubmissionReceipt, TerminationState};

use std::error::Error as StdError;

use async_trait::async_trait;
use certmap_identity::SessionToken;

/// Broad classification of client errors, so callers can single out the
/// cases they handle without knowing the concrete error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// No load balancer with the given id exists in this region/account.
    NotFound,

    /// Any other failure.
    Other,
}

/// Marker trait for load balancer client errors.
pub trait LoadBalancerClientError: StdError + Send + Sync + 'static {
    /// Classifies the error.
    fn kind(&self) -> ErrorKind;
}

/// A client for the load balancer API with asynchronous operations. All
/// calls are authenticated with the session token from the identity
/// exchange.
#[async_trait]
pub trait LoadBalancerClient
where
    Self: Clone + Send + Sync + 'static,
{
    /// The error type for the client.
    type Error: LoadBalancerClientError;

    /// Verifies that the load balancer exists. A missing load balancer is
    /// an [`ErrorKind::NotFound`] error; nothing is retried.
    async fn check_exists(&self, lb_id: &str, token: &SessionToken) -> Result<(), Self::Error>;

    /// Queries the current SSL termination state of the load balancer.
    async fn ssl_termination(
        &self,
        lb_id: &str,
        token: &SessionToken,
    ) -> Result<TerminationState, Self::Error>;

    /// Submits a certificate mapping to the load balancer. The receipt is
    /// returned verbatim whatever the response status; the remote service
    /// is authoritative about whether the submission was accepted.
    async fn add_certificate_mapping(
        &self,
        lb_id: &str,
        token: &SessionToken,
        mapping: &CertificateMapping,
    ) -> Result<SubmissionReceipt, Self::Error>;

    /// Lists the certificate mappings currently attached to the load
    /// balancer.
    async fn list_certificate_mappings(
        &self,
        lb_id: &str,
        token: &SessionToken,
    ) -> Result<serde_json::Value, Self::Error>;
}
