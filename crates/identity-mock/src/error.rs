use std::fmt;

use certmap_identity::IdentityServiceError;

/// Error type for the mock identity service.
#[derive(Debug)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mock identity service denied the exchange")
    }
}

impl std::error::Error for Error {}
impl IdentityServiceError for Error {}
