//! Error types for the ledger

use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
///
/// There is no fatal class here: every variant is either a rejected draft
/// (`Validation`) or a retryable I/O failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Draft failed validation; lists every missing or invalid field
    #[error("Validation failed: missing or invalid fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Store error (append/list/delete failed; retryable, no partial state)
    #[error("Store error: {0}")]
    Store(String),

    /// Transaction not found
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<rocksdb::Error> for Error {
    fn from(err: rocksdb::Error) -> Self {
        Error::Store(err.to_string())
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_lists_fields() {
        let err = Error::Validation(vec!["payer".to_string(), "amount".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("payer"));
        assert!(msg.contains("amount"));
    }
}
