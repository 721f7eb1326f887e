use log::debug;

use super::connection::JsonConnection;
use crate::storage::traits::{LocalStorage, StorageError};

/// File-backed `LocalStorage`: one `<key>.json` file per key in the data directory
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    connection: JsonConnection,
}

impl JsonFileStorage {
    /// Create a new file storage over an existing connection
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl LocalStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.connection.key_file_path(key)?;
        let value = JsonConnection::read_optional(&path)?;

        if value.is_none() {
            debug!("No stored value for key '{}'", key);
        }
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.connection.key_file_path(key)?;
        JsonConnection::write_atomic(&path, value)
    }
}
