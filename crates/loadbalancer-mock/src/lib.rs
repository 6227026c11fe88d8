//! A mock implementation of the load balancer client. Used for testing.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::Error;

use std::sync::Arc;

use async_trait::async_trait;
use certmap_identity::SessionToken;
use certmap_loadbalancer::{
    CertificateMapping, LoadBalancerClient, SubmissionReceipt, TerminationState,
};
use tokio::sync::Mutex;

/// A remote call observed by the mock, in invocation order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    /// Existence probe for the given load balancer id.
    CheckExists(String),

    /// Termination state query for the given load balancer id.
    SslTermination(String),

    /// Mapping submission for the given load balancer id.
    AddCertificateMapping(String),

    /// Mapping listing for the given load balancer id.
    ListCertificateMappings(String),
}

/// A scripted in-memory implementation of the [`LoadBalancerClient`] trait
/// which records every call it receives.
#[derive(Clone, Debug)]
pub struct MockLoadBalancerClient {
    exists: bool,
    termination: TerminationState,
    receipt: SubmissionReceipt,
    listing: serde_json::Value,
    calls: Arc<Mutex<Vec<Call>>>,
    submitted: Arc<Mutex<Vec<CertificateMapping>>>,
}

impl Default for MockLoadBalancerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLoadBalancerClient {
    /// Creates a mock for an existing load balancer with no SSL
    /// termination configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            exists: true,
            termination: TerminationState {
                enabled: false,
                raw: r#"{"message":"No SSL termination configuration found"}"#.to_string(),
            },
            receipt: SubmissionReceipt {
                status: 202,
                body: String::new(),
            },
            listing: serde_json::json!({ "certificateMappings": [] }),
            calls: Arc::new(Mutex::new(Vec::new())),
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Scripts whether the load balancer exists.
    #[must_use]
    pub fn with_exists(mut self, exists: bool) -> Self {
        self.exists = exists;
        self
    }

    /// Scripts the termination state returned by the mock.
    #[must_use]
    pub fn with_termination(mut self, enabled: bool, raw: impl Into<String>) -> Self {
        self.termination = TerminationState {
            enabled,
            raw: raw.into(),
        };
        self
    }

    /// Scripts the submission receipt returned by the mock.
    #[must_use]
    pub fn with_receipt(mut self, status: u16, body: impl Into<String>) -> Self {
        self.receipt = SubmissionReceipt {
            status,
            body: body.into(),
        };
        self
    }

    /// Scripts the mapping listing returned by the mock.
    #[must_use]
    pub fn with_listing(mut self, listing: serde_json::Value) -> Self {
        self.listing = listing;
        self
    }

    /// The calls observed so far, in order.
    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    /// The mapping payloads submitted so far, in order.
    pub async fn submitted_mappings(&self) -> Vec<CertificateMapping> {
        self.submitted.lock().await.clone()
    }

    async fn record(&self, call: Call) {
        self.calls.lock().await.push(call);
    }
}

#[async_trait]
impl LoadBalancerClient for MockLoadBalancerClient {
    type Error = Error;

    async fn check_exists(&self, lb_id: &str, _token: &SessionToken) -> Result<(), Self::Error> {
        self.record(Call::CheckExists(lb_id.to_string())).await;

        if self.exists {
            Ok(())
        } else {
            Err(Error::NotFound(lb_id.to_string()))
        }
    }

    async fn ssl_termination(
        &self,
        lb_id: &str,
        _token: &SessionToken,
    ) -> Result<TerminationState, Self::Error> {
        self.record(Call::SslTermination(lb_id.to_string())).await;

        Ok(self.termination.clone())
    }

    async fn add_certificate_mapping(
        &self,
        lb_id: &str,
        _token: &SessionToken,
        mapping: &CertificateMapping,
    ) -> Result<SubmissionReceipt, Self::Error> {
        self.record(Call::AddCertificateMapping(lb_id.to_string()))
            .await;
        self.submitted.lock().await.push(mapping.clone());

        Ok(self.receipt.clone())
    }

    async fn list_certificate_mappings(
        &self,
        lb_id: &str,
        _token: &SessionToken,
    ) -> Result<serde_json::Value, Self::Error> {
        self.record(Call::ListCertificateMappings(lb_id.to_string()))
            .await;

        Ok(self.listing.clone())
    }
}
