//! # Storage Module
//!
//! Handles all data persistence for the dashboard.
//!
//! Each entity collection (customers, contracts, reminders, expenses) lives
//! under its own key in a `LocalStorage` and is read and written whole. The
//! domain layer only sees `RecordRepository<T>` and `CollectionStore<T>`, so
//! the backend can be swapped between the JSON file store and the in-memory
//! store without touching any service.
//!
//! ## Backends
//!
//! - **JsonFileStorage**: one JSON file per key in the data directory
//! - **MemoryStorage**: process-local map, for tests and throwaway sessions

pub mod collection;
pub mod json;
pub mod memory;
pub mod repository;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use collection::{load_all, save_all, CollectionStore, Revision, Snapshot};
pub use json::{JsonConnection, JsonFileStorage};
pub use memory::MemoryStorage;
pub use repository::RecordRepository;
pub use traits::{LocalStorage, StorageError};
