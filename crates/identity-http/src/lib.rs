//! An implementation of the identity exchange which talks to the account
//! identity endpoint over HTTP.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::{Error, Result};

use std::time::Duration;

use async_trait::async_trait;
use certmap_identity::{IdentityService, SessionToken};
use reqwest::Client;
use serde::{Deserialize, Serialize};

static DEFAULT_TOKEN_URL: &str = "https://identity.api.rackspacecloud.com/v2.0/tokens";

// Hardening only; failed exchanges are never retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP implementation of the [`IdentityService`] trait.
#[derive(Clone, Debug)]
pub struct HttpIdentityService {
    client: Client,
    token_url: String,
}

impl HttpIdentityService {
    /// Creates a service against the default identity endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_token_url(DEFAULT_TOKEN_URL)
    }

    /// Creates a service against a specific token endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_token_url(token_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            token_url: token_url.into(),
        })
    }
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    auth: AuthBlock<'a>,
}

#[derive(Serialize)]
struct AuthBlock<'a> {
    #[serde(rename = "RAX-KSKEY:apiKeyCredentials")]
    api_key_credentials: ApiKeyCredentials<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiKeyCredentials<'a> {
    username: &'a str,
    api_key: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    access: Access,
}

#[derive(Deserialize)]
struct Access {
    token: Token,
}

#[derive(Deserialize)]
struct Token {
    id: String,
}

// Extracts `access.token.id`; kept standalone so parsing is testable
// without a live endpoint.
fn token_from_body(body: &str) -> Result<SessionToken> {
    let response: AuthResponse = serde_json::from_str(body)?;

    Ok(SessionToken::new(response.access.token.id))
}

#[async_trait]
impl IdentityService for HttpIdentityService {
    type Error = Error;

    async fn authenticate(&self, username: &str, api_key: &str) -> Result<SessionToken> {
        let payload = AuthRequest {
            auth: AuthBlock {
                api_key_credentials: ApiKeyCredentials { username, api_key },
            },
        };

        let response = self
            .client
            .post(&self.token_url)
            .json(&payload)
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

        token_from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_request_uses_api_key_credential_block() {
        let payload = AuthRequest {
            auth: AuthBlock {
                api_key_credentials: ApiKeyCredentials {
                    username: "user",
                    api_key: "key",
                },
            },
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "auth": {
                    "RAX-KSKEY:apiKeyCredentials": {
                        "username": "user",
                        "apiKey": "key"
                    }
                }
            })
        );
    }

    #[test]
    fn token_is_extracted_from_nested_response() {
        let body = r#"{"access":{"token":{"id":"abc123","expires":"2026-01-01T00:00:00Z"},"serviceCatalog":[]}}"#;

        let token = token_from_body(body).unwrap();

        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn missing_token_field_is_malformed() {
        let body = r#"{"access":{"serviceCatalog":[]}}"#;

        let error = token_from_body(body).unwrap_err();

        assert!(matches!(error, Error::MalformedResponse(_)));
    }
}
