use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for certificate material loading.
#[derive(Debug, Error)]
pub enum Error {
    /// A material file was empty.
    #[error("file {} is empty", path.display())]
    Empty {
        /// The offending path.
        path: PathBuf,
    },

    /// A material file could not be read.
    #[error("unable to open file {}: {source}", path.display())]
    Unreadable {
        /// The offending path.
        path: PathBuf,

        /// The underlying IO error.
        source: std::io::Error,
    },
}
