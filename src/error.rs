//! Error types for the bgdict lookup service.

use thiserror::Error;

/// Main error type for bgdict operations.
#[derive(Error, Debug)]
pub enum DictError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DictError {
    /// Create a not-found error for a word id.
    pub fn word_not_found(id: i32) -> Self {
        Self::NotFound(format!("no word with id {}", id))
    }

    /// Whether this error means "no row" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Data-access failures raised by a word store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Row decode error: {0}")]
    Decode(String),

    #[error("Seed data error: {0}")]
    Seed(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StorageError::Connection(err.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) | sqlx::Error::Decode(_) => {
                StorageError::Decode(err.to_string())
            }
            other => StorageError::Query(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for DictError {
    fn from(err: sqlx::Error) -> Self {
        DictError::Storage(err.into())
    }
}

/// Result type alias for bgdict operations.
pub type Result<T> = std::result::Result<T, DictError>;
