//! Error types for the settlement engine

use thiserror::Error;

/// Result type for settlement operations
pub type Result<T> = std::result::Result<T, Error>;

/// Settlement errors
#[derive(Error, Debug)]
pub enum Error {
    /// Ledger error (validation or store failure)
    #[error("Ledger error: {0}")]
    Ledger(#[from] splitledger_core::Error),

    /// Notification sink failure
    ///
    /// Only ever logged at the engine boundary; never surfaced to the
    /// caller of a settlement confirmation.
    #[error("Notification error: {0}")]
    Notification(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
