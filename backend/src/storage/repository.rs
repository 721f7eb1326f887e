//! # Record Repository
//!
//! Persistence-backed CRUD for one entity collection. Each mutating call is
//! one read-modify-write cycle: load a snapshot, apply a pure
//! `record_store` operation, and write the whole collection back with a
//! revision check so a concurrent writer is reported instead of overwritten.
//! Calls that change nothing (unknown id) do not write.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

use crate::domain::record_store::{self, Record};
use crate::storage::collection::CollectionStore;
use crate::storage::traits::{LocalStorage, StorageError};

pub struct RecordRepository<T> {
    store: CollectionStore<T>,
}

impl<T> Clone for RecordRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T: Record> RecordRepository<T> {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            store: CollectionStore::new(storage, T::COLLECTION_KEY),
        }
    }

    /// All records in storage order
    pub fn list(&self) -> Vec<T> {
        let records = self.store.load_all();
        debug!("Loaded {} records from '{}'", records.len(), T::COLLECTION_KEY);
        records
    }

    pub fn get(&self, id: &str) -> Option<T> {
        let records = self.store.load_all();
        record_store::find(&records, id).cloned()
    }

    /// Create a record stamped with the current time
    pub fn create(&self, input: T::Input) -> Result<T, StorageError> {
        self.create_at(input, Utc::now())
    }

    /// Create a record stamped with `now`
    pub fn create_at(&self, input: T::Input, now: DateTime<Utc>) -> Result<T, StorageError> {
        let snapshot = self.store.load_snapshot();
        let (record, updated) = record_store::create(&snapshot.records, input, now);

        self.store.save_if_unchanged(&updated, &snapshot.revision)?;

        info!("Created record {} in '{}'", record.id(), T::COLLECTION_KEY);
        Ok(record)
    }

    /// Overwrite the editable fields of the record with `id`.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    pub fn update(&self, id: &str, patch: T::Input) -> Result<Option<T>, StorageError> {
        let snapshot = self.store.load_snapshot();

        if record_store::find(&snapshot.records, id).is_none() {
            warn!("Record {} not found in '{}', nothing to update", id, T::COLLECTION_KEY);
            return Ok(None);
        }

        let updated = record_store::update(&snapshot.records, id, patch);
        self.store.save_if_unchanged(&updated, &snapshot.revision)?;

        info!("Updated record {} in '{}'", id, T::COLLECTION_KEY);
        Ok(record_store::find(&updated, id).cloned())
    }

    /// Apply `change` to the record with `id` and persist it.
    ///
    /// For field-level operations such as toggles that are not a full patch.
    pub fn modify<F>(&self, id: &str, change: F) -> Result<Option<T>, StorageError>
    where
        F: FnOnce(&mut T),
    {
        let snapshot = self.store.load_snapshot();
        let mut records = snapshot.records;

        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            warn!("Record {} not found in '{}', nothing to modify", id, T::COLLECTION_KEY);
            return Ok(None);
        };
        change(record);
        let changed = record.clone();

        self.store.save_if_unchanged(&records, &snapshot.revision)?;

        info!("Modified record {} in '{}'", id, T::COLLECTION_KEY);
        Ok(Some(changed))
    }

    /// Delete the record with `id`; returns whether one was removed
    pub fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let snapshot = self.store.load_snapshot();

        let remaining = record_store::remove(&snapshot.records, id);
        if remaining.len() == snapshot.records.len() {
            debug!("Record {} not found in '{}', nothing to delete", id, T::COLLECTION_KEY);
            return Ok(false);
        }

        self.store.save_if_unchanged(&remaining, &snapshot.revision)?;

        info!("Deleted record {} from '{}'", id, T::COLLECTION_KEY);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::customer::CustomerInput;
    use crate::storage::memory::MemoryStorage;
    use crate::storage::test_utils::TestEnvironment;
    use chrono::TimeZone;
    use shared::Customer;

    fn input(name: &str) -> CustomerInput {
        CustomerInput {
            name: name.to_string(),
            mobile: "0912000000".to_string(),
            area: "Downtown".to_string(),
            notes: String::new(),
        }
    }

    fn memory_repo() -> (Arc<MemoryStorage>, RecordRepository<Customer>) {
        let storage = Arc::new(MemoryStorage::new());
        let repo = RecordRepository::new(storage.clone());
        (storage, repo)
    }

    #[test]
    fn test_create_persists_record() {
        let env = TestEnvironment::new().unwrap();
        let repo: RecordRepository<Customer> = RecordRepository::new(env.shared_storage());

        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let customer = repo.create_at(input("Bob"), now).unwrap();

        assert_eq!(customer.id, "1704067200000");
        assert_eq!(customer.created_at, "2024-01-01T00:00:00.000Z");

        let raw = std::fs::read_to_string(env.base_directory().join("customers.json")).unwrap();
        assert!(raw.contains(r#""createdAt":"2024-01-01T00:00:00.000Z""#));
        assert_eq!(repo.list(), vec![customer]);
    }

    #[test]
    fn test_create_grows_collection_by_one() {
        let (_storage, repo) = memory_repo();

        let first = repo.create(input("Alice")).unwrap();
        let before = repo.list();
        let second = repo.create(input("Bob")).unwrap();
        let after = repo.list();

        assert_eq!(after.len(), before.len() + 1);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_keeps_identity() {
        let (_storage, repo) = memory_repo();
        let created = repo.create(input("Bob")).unwrap();

        let updated = repo.update(&created.id, input("Robert")).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Robert");
        assert_eq!(repo.get(&created.id), Some(updated));
    }

    #[test]
    fn test_update_unknown_id_does_not_write() {
        let (storage, repo) = memory_repo();

        assert_eq!(repo.update("nope", input("Ghost")).unwrap(), None);
        assert_eq!(storage.get_item("customers").unwrap(), None);
    }

    #[test]
    fn test_delete_twice() {
        let (_storage, repo) = memory_repo();
        let keep = repo.create(input("Keep")).unwrap();
        let gone = repo.create(input("Gone")).unwrap();

        assert!(repo.delete(&gone.id).unwrap());
        assert!(!repo.delete(&gone.id).unwrap());
        assert_eq!(repo.list(), vec![keep]);
    }

    #[test]
    fn test_modify_applies_change() {
        let (_storage, repo) = memory_repo();
        let created = repo.create(input("Bob")).unwrap();

        let modified = repo
            .modify(&created.id, |c| c.notes = "vip".to_string())
            .unwrap()
            .unwrap();

        assert_eq!(modified.notes, "vip");
        assert_eq!(repo.get(&created.id).unwrap().notes, "vip");
        assert_eq!(repo.modify("missing", |c| c.notes.clear()).unwrap(), None);
    }

    #[test]
    fn test_corrupt_collection_is_replaced_on_write() {
        let (storage, repo) = memory_repo();
        storage.set_item("customers", "garbage").unwrap();

        assert!(repo.list().is_empty());

        let created = repo.create(input("Bob")).unwrap();
        assert_eq!(repo.list(), vec![created]);
    }
}
