//! # Collection Store
//!
//! Typed whole-collection persistence on top of `LocalStorage`. A collection
//! is stored as one JSON array under its key; every save rewrites the array.
//!
//! Reads are forgiving: a missing key, an unreadable value or a value that is
//! not a JSON array of the expected shape all load as an empty collection.
//! Writes are not: a failed write is returned to the caller.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::storage::traits::{LocalStorage, StorageError};

/// Opaque marker for the stored state a collection was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(Option<String>);

impl Revision {
    /// Revision of a key that has never been written
    pub fn absent() -> Self {
        Revision(None)
    }
}

/// Records loaded together with the revision they were read at
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub records: Vec<T>,
    pub revision: Revision,
}

/// Read the full collection stored under `key`.
///
/// Never fails: absent or unparseable data is an empty collection.
pub fn load_all<T: DeserializeOwned>(storage: &dyn LocalStorage, key: &str) -> Vec<T> {
    let raw = match storage.get_item(key) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Failed to read collection '{}', treating as empty: {}", key, e);
            None
        }
    };
    decode(key, raw.as_deref())
}

/// Overwrite the full collection stored under `key` with a single write
pub fn save_all<T: Serialize>(
    storage: &dyn LocalStorage,
    key: &str,
    records: &[T],
) -> Result<(), StorageError> {
    let content = serde_json::to_string(records)?;
    storage.set_item(key, &content)?;
    debug!("Saved {} records to '{}'", records.len(), key);
    Ok(())
}

fn decode<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Option<Vec<T>>>(raw) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => {
            warn!("Stored collection '{}' is not parseable, treating as empty: {}", key, e);
            Vec::new()
        }
    }
}

/// Typed handle on one named collection
pub struct CollectionStore<T> {
    storage: Arc<dyn LocalStorage>,
    key: &'static str,
    _records: PhantomData<fn() -> T>,
}

impl<T> Clone for CollectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            key: self.key,
            _records: PhantomData,
        }
    }
}

impl<T> CollectionStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(storage: Arc<dyn LocalStorage>, key: &'static str) -> Self {
        Self {
            storage,
            key,
            _records: PhantomData,
        }
    }

    pub fn load_all(&self) -> Vec<T> {
        load_all(self.storage.as_ref(), self.key)
    }

    pub fn save_all(&self, records: &[T]) -> Result<(), StorageError> {
        save_all(self.storage.as_ref(), self.key, records)
    }

    /// Load the collection along with the revision it was read at.
    ///
    /// A read failure yields an empty collection at the absent revision, so a
    /// later checked save over existing data reports a conflict rather than
    /// silently replacing it.
    pub fn load_snapshot(&self) -> Snapshot<T> {
        let raw = match self.storage.get_item(self.key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read collection '{}', treating as empty: {}", self.key, e);
                None
            }
        };

        Snapshot {
            records: decode(self.key, raw.as_deref()),
            revision: Revision(raw),
        }
    }

    /// Save only if the stored collection is still at `expected`.
    ///
    /// Returns the revision of the newly written collection.
    pub fn save_if_unchanged(
        &self,
        records: &[T],
        expected: &Revision,
    ) -> Result<Revision, StorageError> {
        let current = Revision(self.storage.get_item(self.key)?);
        if &current != expected {
            warn!("Collection '{}' changed since it was loaded, refusing to overwrite", self.key);
            return Err(StorageError::Conflict(self.key.to_string()));
        }

        let content = serde_json::to_string(records)?;
        self.storage.set_item(self.key, &content)?;
        debug!("Saved {} records to '{}'", records.len(), self.key);

        Ok(Revision(Some(content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    fn setup() -> (Arc<MemoryStorage>, CollectionStore<Note>) {
        let storage = Arc::new(MemoryStorage::new());
        let store = CollectionStore::new(storage.clone(), "notes");
        (storage, store)
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let (_storage, store) = setup();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let (storage, store) = setup();

        storage.set_item("notes", "{not json").unwrap();
        assert!(store.load_all().is_empty());

        storage.set_item("notes", r#"{"id":"1"}"#).unwrap();
        assert!(store.load_all().is_empty());

        storage.set_item("notes", r#"[{"id":"1"}]"#).unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_null_loads_empty() {
        let (storage, store) = setup();
        storage.set_item("notes", "null").unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let (storage, store) = setup();
        let notes = vec![note("2", "second"), note("1", "first")];

        store.save_all(&notes).unwrap();

        assert_eq!(store.load_all(), notes);
        assert_eq!(
            storage.get_item("notes").unwrap().as_deref(),
            Some(r#"[{"id":"2","text":"second"},{"id":"1","text":"first"}]"#)
        );
    }

    #[test]
    fn test_free_functions_match_store() {
        let (storage, store) = setup();

        save_all(storage.as_ref(), "notes", &[note("1", "a")]).unwrap();
        assert_eq!(store.load_all(), vec![note("1", "a")]);

        let loaded: Vec<Note> = load_all(storage.as_ref(), "notes");
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_checked_save_succeeds_when_unchanged() {
        let (_storage, store) = setup();

        let snapshot = store.load_snapshot();
        assert_eq!(snapshot.revision, Revision::absent());

        let revision = store.save_if_unchanged(&[note("1", "a")], &snapshot.revision).unwrap();
        let again = store.save_if_unchanged(&[note("1", "b")], &revision).unwrap();

        assert_ne!(revision, again);
        assert_eq!(store.load_all(), vec![note("1", "b")]);
    }

    #[test]
    fn test_checked_save_detects_lost_update() {
        let (_storage, store) = setup();
        store.save_all(&[note("1", "a")]).unwrap();

        let first_reader = store.load_snapshot();
        let second_reader = store.load_snapshot();

        store
            .save_if_unchanged(&[note("1", "a"), note("2", "b")], &first_reader.revision)
            .unwrap();

        let result = store.save_if_unchanged(&[], &second_reader.revision);
        assert!(matches!(result, Err(StorageError::Conflict(key)) if key == "notes"));
        assert_eq!(store.load_all().len(), 2);
    }
}
