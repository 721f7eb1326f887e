use shared::{Expense, ExpenseForm};

use crate::domain::commands::expense::ExpenseInput;
use crate::domain::record_store::{FieldSelector, Record};
use crate::domain::validation::{
    optional_date, optional_text, parse_amount, required_text, ValidationError,
};

pub const EXPENSES_KEY: &str = "expenses";

fn title(expense: &Expense) -> &str {
    &expense.title
}

fn category(expense: &Expense) -> &str {
    &expense.category
}

fn notes(expense: &Expense) -> &str {
    &expense.notes
}

pub const EXPENSE_SEARCH_FIELDS: &[FieldSelector<Expense>] = &[title, category, notes];

pub fn expense_date(expense: &Expense) -> String {
    expense.date.clone()
}

pub fn expense_amount(expense: &Expense) -> Option<f64> {
    Some(expense.amount)
}

impl Record for Expense {
    type Input = ExpenseInput;
    const COLLECTION_KEY: &'static str = EXPENSES_KEY;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, created_at: String, input: ExpenseInput) -> Self {
        Expense {
            id,
            title: input.title,
            category: input.category,
            amount: input.amount,
            date: input.date,
            notes: input.notes,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ExpenseInput) {
        self.title = patch.title;
        self.category = patch.category;
        self.amount = patch.amount;
        self.date = patch.date;
        self.notes = patch.notes;
    }
}

impl TryFrom<ExpenseForm> for ExpenseInput {
    type Error = ValidationError;

    fn try_from(form: ExpenseForm) -> Result<Self, Self::Error> {
        Ok(ExpenseInput {
            title: required_text("Title", &form.title)?,
            category: optional_text("Category", &form.category)?,
            amount: parse_amount(&form.amount)?,
            date: optional_date(&form.date)?,
            notes: form.notes.trim().to_string(),
        })
    }
}
