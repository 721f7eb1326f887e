//! # BizDesk Backend
//!
//! Synchronous record store for a small-business dashboard: customers,
//! contracts, reminders and expenses, each kept as one JSON collection in
//! the data directory. Front ends talk to the services on [`Backend`].

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod logging;
pub mod storage;

pub use config::AppConfig;
pub use domain::{
    ContractService, CustomerService, DashboardService, ExpenseService, ReminderService,
};
pub use storage::{JsonConnection, JsonFileStorage, LocalStorage, MemoryStorage, StorageError};

/// Main backend struct that wires every service over one storage
#[derive(Clone)]
pub struct Backend {
    pub customer_service: CustomerService,
    pub contract_service: ContractService,
    pub reminder_service: ReminderService,
    pub expense_service: ExpenseService,
    pub dashboard_service: DashboardService,
}

impl Backend {
    /// Backend persisting to `config.data_directory`
    pub fn new(config: &AppConfig) -> Result<Self> {
        logging::init(&config.log_level);

        let connection = JsonConnection::new(config.data_directory.clone()).with_context(|| {
            format!("Failed to open data directory {:?}", config.data_directory)
        })?;
        info!("Using data directory {:?}", connection.base_directory());

        Ok(Self::with_storage(Arc::new(JsonFileStorage::new(connection))))
    }

    /// Backend that keeps everything in memory
    pub fn in_memory() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    pub fn with_storage(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            customer_service: CustomerService::new(storage.clone()),
            contract_service: ContractService::new(storage.clone()),
            reminder_service: ReminderService::new(storage.clone()),
            expense_service: ExpenseService::new(storage.clone()),
            dashboard_service: DashboardService::new(storage),
        }
    }
}
