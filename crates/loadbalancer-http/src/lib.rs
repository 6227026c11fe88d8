//! An implementation of the load balancer client which talks to a region
//! endpoint over HTTP.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::{Error, Result};

use std::time::Duration;

use async_trait::async_trait;
use certmap_identity::{Region, SessionToken};
use certmap_loadbalancer::{
    CertificateMapping, CertificateMappingEnvelope, LoadBalancerClient, SubmissionReceipt,
    TerminationState,
};
use reqwest::{Client, StatusCode};

static AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

// Hardening only; the no-retry contract still holds, since a mapping
// submission must never be silently repeated.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP implementation of the [`LoadBalancerClient`] trait, bound to one
/// region endpoint and tenant.
#[derive(Clone, Debug)]
pub struct HttpLoadBalancerClient {
    client: Client,
    endpoint: String,
    tenant_id: String,
}

impl HttpLoadBalancerClient {
    /// Creates a client for the given region and tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(region: Region, tenant_id: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(region.endpoint(), tenant_id)
    }

    /// Creates a client against an explicit endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_endpoint(endpoint: impl Into<String>, tenant_id: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            tenant_id: tenant_id.into(),
        })
    }

    fn load_balancer_url(&self, lb_id: &str) -> String {
        format!(
            "{}/v1.0/{}/loadbalancers/{}",
            self.endpoint, self.tenant_id, lb_id
        )
    }

    fn ssl_termination_url(&self, lb_id: &str) -> String {
        format!("{}/ssltermination", self.load_balancer_url(lb_id))
    }

    fn certificate_mappings_url(&self, lb_id: &str) -> String {
        format!("{}/certificatemappings", self.ssl_termination_url(lb_id))
    }
}

#[async_trait]
impl LoadBalancerClient for HttpLoadBalancerClient {
    type Error = Error;

    async fn check_exists(&self, lb_id: &str, token: &SessionToken) -> Result<()> {
        let response = self
            .client
            .get(self.load_balancer_url(lb_id))
            .header(AUTH_TOKEN_HEADER, token.as_str())
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(Error::NotFound {
                id: lb_id.to_string(),
            }),
            status => Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    async fn ssl_termination(
        &self,
        lb_id: &str,
        token: &SessionToken,
    ) -> Result<TerminationState> {
        let response = self
            .client
            .get(self.ssl_termination_url(lb_id))
            .header(AUTH_TOKEN_HEADER, token.as_str())
            .send()
            .await?;

        // 200 means termination is configured; any other status means it
        // is not, and the body is kept for the caller to interpret.
        let enabled = response.status() == StatusCode::OK;
        let raw = response.text().await?;

        Ok(TerminationState { enabled, raw })
    }

    async fn add_certificate_mapping(
        &self,
        lb_id: &str,
        token: &SessionToken,
        mapping: &CertificateMapping,
    ) -> Result<SubmissionReceipt> {
        let response = self
            .client
            .post(self.certificate_mappings_url(lb_id))
            .header(AUTH_TOKEN_HEADER, token.as_str())
            .json(&CertificateMappingEnvelope {
                certificate_mapping: mapping,
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(SubmissionReceipt { status, body })
    }

    async fn list_certificate_mappings(
        &self,
        lb_id: &str,
        token: &SessionToken,
    ) -> Result<serde_json::Value> {
        let response = self
            .client
            .get(self.certificate_mappings_url(lb_id))
            .header(AUTH_TOKEN_HEADER, token.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
