//! A mock implementation of the identity exchange. Used for testing.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::Error;

use async_trait::async_trait;
use certmap_identity::{IdentityService, SessionToken};

/// A mock implementation of the [`IdentityService`] trait which hands out a
/// canned token, or denies every exchange.
#[derive(Clone, Debug)]
pub struct MockIdentityService {
    token: String,
    deny: bool,
}

impl MockIdentityService {
    /// Creates a service which issues the given token for any credentials.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            deny: false,
        }
    }

    /// Creates a service which fails every exchange.
    #[must_use]
    pub const fn denying() -> Self {
        Self {
            token: String::new(),
            deny: true,
        }
    }
}

#[async_trait]
impl IdentityService for MockIdentityService {
    type Error = Error;

    async fn authenticate(
        &self,
        _username: &str,
        _api_key: &str,
    ) -> Result<SessionToken, Self::Error> {
        if self.deny {
            return Err(Error);
        }

        Ok(SessionToken::new(&self.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issues_the_canned_token() {
        let identity = MockIdentityService::new("tok-1");

        let token = identity.authenticate("user", "key").await.unwrap();

        assert_eq!(token.as_str(), "tok-1");
    }

    #[tokio::test]
    async fn denying_service_fails_every_exchange() {
        let identity = MockIdentityService::denying();

        assert!(identity.authenticate("user", "key").await.is_err());
    }
}
