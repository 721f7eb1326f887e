//! # Domain Module
//!
//! Business logic for the dashboard. `record_store` holds the pure
//! collection operations shared by every entity; the services put
//! validation, persistence and logging around them for one entity each.

pub mod commands;
pub mod contract_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod expense_service;
pub mod formatting;
pub mod models;
pub mod record_store;
pub mod reminder_service;
pub mod validation;

pub use contract_service::ContractService;
pub use customer_service::CustomerService;
pub use dashboard_service::DashboardService;
pub use expense_service::ExpenseService;
pub use record_store::{FieldSelector, Record};
pub use reminder_service::ReminderService;
pub use validation::ValidationError;
