use thiserror::Error;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for credential resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither the command-line flag nor the environment fallback was set.
    #[error("no setting for {flag} was found: pass the flag or set the {env} environment variable")]
    MissingCredential {
        /// The command-line flag for this credential.
        flag: &'static str,

        /// The environment variable consulted as a fallback.
        env: &'static str,
    },

    /// The region code is not one of the supported regions.
    #[error("unknown region {0:?} (expected one of: dfw, hkg, iad, lon, ord, syd)")]
    UnknownRegion(String),
}
