//! Credential resolution and identity exchange for cloud load balancer accounts.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod credentials;
mod error;
mod region;

pub use credentials::{CredentialInputs, Credentials};
pub use error::Error;
pub use region::Region;

use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;

/// Opaque bearer token obtained from the identity exchange. Valid for the
/// lifetime of the process; never refreshed or persisted.
#[derive(Clone)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value, as presented in the auth header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tokens are credentials; keep them out of debug output.
        f.write_str("SessionToken(..)")
    }
}

/// Marker trait for identity service errors.
pub trait IdentityServiceError: StdError + Send + Sync + 'static {}

/// Exchanges account credentials for a short-lived session token.
#[async_trait]
pub trait IdentityService
where
    Self: Clone + Send + Sync + 'static,
{
    /// The error type for the identity service.
    type Error: IdentityServiceError;

    /// Exchanges the username and API key for a session token. A failure
    /// here indicates a configuration problem and is never retried.
    async fn authenticate(
        &self,
        username: &str,
        api_key: &str,
    ) -> Result<SessionToken, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_token_debug_is_redacted() {
        let token = SessionToken::new("super-secret-token");

        assert_eq!(format!("{token:?}"), "SessionToken(..)");
        assert_eq!(token.as_str(), "super-secret-token");
    }
}
