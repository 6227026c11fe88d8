//! The certificate mapping provisioning workflow: one linear pass of
//! authenticate, inspect, gate, submit, confirm. Each remote call either
//! succeeds or aborts the whole run; nothing is retried.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod decision;
mod error;

pub use decision::TerminationDecision;
pub use error::{Error, Result};

use certmap_identity::{Credentials, IdentityService};
use certmap_loadbalancer::{
    CertificateMapping, ErrorKind, LoadBalancerClient, LoadBalancerClientError, SubmissionReceipt,
};
use tracing::info;

/// The caller's provisioning intent for one run.
#[derive(Clone, Debug)]
pub struct ProvisionRequest {
    /// Id of the target load balancer.
    pub lb_id: String,

    /// Whether the caller asserts that this run should enable SSL
    /// termination (the `--ssl` flag).
    pub enable_termination: bool,

    /// The certificate mapping to submit, loaded eagerly before any remote
    /// call.
    pub mapping: CertificateMapping,
}

/// The artifacts of a completed run.
#[derive(Clone, Debug)]
pub struct ProvisionOutcome {
    /// The submission response, verbatim. Deliberately not validated; the
    /// remote service is authoritative about acceptance.
    pub receipt: SubmissionReceipt,

    /// The post-submission mapping listing, as returned by the service.
    pub mappings: serde_json::Value,
}

/// Runs the provisioning pass against the given identity service and load
/// balancer client.
///
/// # Errors
///
/// Fails fatally on a rejected identity exchange, an unresolved load
/// balancer id, a decision-gate violation, or any failed API call. On the
/// gate's refusal paths no submission or listing call is made.
pub async fn provision<I, L>(
    credentials: &Credentials,
    request: ProvisionRequest,
    identity: &I,
    client: &L,
) -> Result<ProvisionOutcome>
where
    I: IdentityService,
    L: LoadBalancerClient,
{
    let token = identity
        .authenticate(&credentials.username, &credentials.api_key)
        .await
        .map_err(|e| Error::Auth(e.to_string()))?;
    info!(username = %credentials.username, "authenticated");

    client
        .check_exists(&request.lb_id, &token)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::LoadBalancerNotFound {
                id: request.lb_id.clone(),
            },
            ErrorKind::Other => Error::Api(e.to_string()),
        })?;

    let state = client
        .ssl_termination(&request.lb_id, &token)
        .await
        .map_err(api_error)?;
    info!(
        lb_id = %request.lb_id,
        enabled = state.enabled,
        "queried SSL termination state"
    );

    match TerminationDecision::evaluate(state.enabled, request.enable_termination) {
        TerminationDecision::Proceed => {}
        TerminationDecision::MissingSslFlag => {
            return Err(Error::TerminationNotConfigured {
                detail: state.message(),
            });
        }
        TerminationDecision::AlreadyConfigured => {
            return Err(Error::TerminationAlreadyConfigured);
        }
    }

    let receipt = client
        .add_certificate_mapping(&request.lb_id, &token, &request.mapping)
        .await
        .map_err(api_error)?;
    info!(
        host_name = %request.mapping.host_name,
        status = receipt.status,
        "submitted certificate mapping"
    );

    let mappings = client
        .list_certificate_mappings(&request.lb_id, &token)
        .await
        .map_err(api_error)?;

    Ok(ProvisionOutcome { receipt, mappings })
}

fn api_error<E: LoadBalancerClientError>(error: E) -> Error {
    Error::Api(error.to_string())
}
