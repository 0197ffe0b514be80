//! Storage trait abstraction.

use async_trait::async_trait;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// A passive, durable string-keyed store.
///
/// This trait allows different storage backends to be plugged in. Absence
/// of a key is an ordinary result, not an error; `remove` exists because
/// some entries represent their default state by absence.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the entry under `key`. Removing an absent key is not an error.
    async fn remove(&mut self, key: &str) -> Result<()>;
}
