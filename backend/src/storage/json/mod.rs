//! # JSON File Storage Module
//!
//! File-based `LocalStorage` implementation. Each key is one JSON document in
//! the data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── config.yaml
//! ├── customers.json    ← [{"id":"1704067200000","name":"Bob",...}]
//! ├── contracts.json
//! ├── reminders.json
//! └── expenses.json
//! ```
//!
//! Writes go to `<key>.tmp` first and are renamed over the target, so a reader
//! never sees a half-written collection.

pub mod connection;
pub mod file_storage;

pub use connection::JsonConnection;
pub use file_storage::JsonFileStorage;
