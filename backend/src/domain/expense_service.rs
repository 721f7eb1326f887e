use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use shared::{Expense, ExpenseForm, ExpenseListResponse, ListRequest};

use crate::domain::commands::expense::ExpenseInput;
use crate::domain::models::{expense_amount, expense_date, EXPENSE_SEARCH_FIELDS};
use crate::domain::record_store;
use crate::storage::{LocalStorage, RecordRepository};

/// Service for managing business expenses
#[derive(Clone)]
pub struct ExpenseService {
    repository: RecordRepository<Expense>,
}

impl ExpenseService {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            repository: RecordRepository::new(storage),
        }
    }

    pub fn list_expenses(&self, request: &ListRequest) -> ExpenseListResponse {
        let expenses = self.repository.list();
        let filtered = record_store::search(&expenses, &request.search_term, EXPENSE_SEARCH_FIELDS);
        let expenses = record_store::sort_by_date(&filtered, expense_date, false);
        let total_amount = record_store::sum(&expenses, expense_amount);

        info!(
            "Found {} expenses totalling {:.2} for search '{}'",
            expenses.len(),
            total_amount,
            request.search_term
        );
        ExpenseListResponse {
            expenses,
            total_amount,
        }
    }

    pub fn get_expense(&self, expense_id: &str) -> Option<Expense> {
        let expense = self.repository.get(expense_id);
        if expense.is_none() {
            warn!("Expense not found: {}", expense_id);
        }
        expense
    }

    pub fn create_expense(&self, form: ExpenseForm) -> Result<Expense> {
        info!("Creating expense: title={}, amount={:?}", form.title, form.amount);

        let input = ExpenseInput::try_from(form)?;
        let expense = self
            .repository
            .create(input)
            .context("Failed to save new expense")?;

        info!("Created expense: {} with ID: {}", expense.title, expense.id);
        Ok(expense)
    }

    pub fn update_expense(&self, expense_id: &str, form: ExpenseForm) -> Result<Option<Expense>> {
        info!("Updating expense: {}", expense_id);

        let input = ExpenseInput::try_from(form)?;
        self.repository
            .update(expense_id, input)
            .with_context(|| format!("Failed to save expense {}", expense_id))
    }

    pub fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        info!("Deleting expense: {}", expense_id);

        self.repository
            .delete(expense_id)
            .with_context(|| format!("Failed to delete expense {}", expense_id))
    }
}
