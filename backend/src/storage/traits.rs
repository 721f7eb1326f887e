//! # Storage Traits
//!
//! The persistence seam between record collections and whatever holds their
//! bytes. A `LocalStorage` is a flat key/value store of UTF-8 text, the same
//! shape as a browser's `localStorage`: one key per collection, one complete
//! JSON document per key.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("collection '{0}' was modified by another writer")]
    Conflict(String),
}

/// Key/value text storage
///
/// Implementations must make `set_item` atomic from a reader's point of view:
/// a concurrent `get_item` observes either the old value or the new one,
/// never a partial write.
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keys are used as file names by the file backend, so they are restricted to
/// a portable character set.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
