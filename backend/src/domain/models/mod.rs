//! Record bindings for the four entity kinds.
//!
//! The record structs themselves live in `shared` because they are also the
//! persisted format. This module implements `Record` for each and defines the
//! search fields, sort keys and form conversions.

pub mod contract;
pub mod customer;
pub mod expense;
pub mod reminder;

pub use contract::{contract_amount, contract_date, CONTRACTS_KEY, CONTRACT_SEARCH_FIELDS};
pub use customer::{CUSTOMERS_KEY, CUSTOMER_SEARCH_FIELDS};
pub use expense::{expense_amount, expense_date, EXPENSES_KEY, EXPENSE_SEARCH_FIELDS};
pub use reminder::{due_on, reminder_due, REMINDERS_KEY, REMINDER_SEARCH_FIELDS};
