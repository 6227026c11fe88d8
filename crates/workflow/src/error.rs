use thiserror::Error;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the provisioning workflow. Every variant is fatal; the
/// run is a single pass with no retries.
#[derive(Debug, Error)]
pub enum Error {
    /// The identity exchange failed or returned a malformed response.
    #[error("identity exchange failed: {0}")]
    Auth(String),

    /// A load balancer API call failed.
    #[error("load balancer API error: {0}")]
    Api(String),

    /// The load balancer id did not resolve in this region/account.
    #[error("no load balancer was found with id {id} in this region/account")]
    LoadBalancerNotFound {
        /// The unresolved load balancer id.
        id: String,
    },

    /// Termination is not configured and the run did not ask to enable it.
    #[error(
        "SSL termination is not configured on this load balancer{}; rerun with --ssl to enable it and set this certificate as the default certificate",
        detail.as_ref().map_or_else(String::new, |message| format!(" ({message})"))
    )]
    TerminationNotConfigured {
        /// The service's diagnostic message, when the state query carried
        /// one.
        detail: Option<String>,
    },

    /// Termination is already configured but the run asked to enable it.
    #[error(
        "this load balancer already has SSL termination enabled; rerun without --ssl to add a certificate mapping"
    )]
    TerminationAlreadyConfigured,
}
