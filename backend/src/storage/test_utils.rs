//! Test utilities for file-backed storage
//!
//! Each `TestEnvironment` owns a fresh temporary data directory that is
//! removed when the environment is dropped, even if the test panics.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::json::{JsonConnection, JsonFileStorage};
use super::traits::{LocalStorage, StorageError};

pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self, StorageError> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    pub fn file_storage(&self) -> JsonFileStorage {
        JsonFileStorage::new(self.connection.clone())
    }

    /// File storage as the shared trait object services take
    pub fn shared_storage(&self) -> Arc<dyn LocalStorage> {
        Arc::new(self.file_storage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() {
        let base_path;

        {
            let env = TestEnvironment::new().unwrap();
            base_path = env.base_directory().to_path_buf();

            assert!(base_path.exists());
            env.file_storage().set_item("customers", "[]").unwrap();
            assert!(base_path.join("customers.json").exists());
        }

        assert!(!base_path.exists());
    }
}
