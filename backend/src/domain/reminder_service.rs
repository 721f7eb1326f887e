use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::sync::Arc;

use shared::{ListRequest, Reminder, ReminderForm, ReminderListResponse};

use crate::domain::commands::reminder::ReminderInput;
use crate::domain::models::{due_on, reminder_due, REMINDER_SEARCH_FIELDS};
use crate::domain::record_store;
use crate::storage::{LocalStorage, RecordRepository};

/// Service for managing reminders
#[derive(Clone)]
pub struct ReminderService {
    repository: RecordRepository<Reminder>,
}

impl ReminderService {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            repository: RecordRepository::new(storage),
        }
    }

    /// List reminders matching the search term, earliest due first
    pub fn list_reminders(&self, request: &ListRequest) -> ReminderListResponse {
        let reminders = self.repository.list();
        let filtered = record_store::search(&reminders, &request.search_term, REMINDER_SEARCH_FIELDS);
        let reminders = record_store::sort_by_date(&filtered, reminder_due, true);

        info!("Found {} reminders for search '{}'", reminders.len(), request.search_term);
        ReminderListResponse { reminders }
    }

    /// Reminders due on `day`, earliest first
    pub fn reminders_for_day(&self, day: NaiveDate) -> Vec<Reminder> {
        let due = due_on(&self.repository.list(), day);

        debug!("{} reminders due on {}", due.len(), day);
        due
    }

    pub fn get_reminder(&self, reminder_id: &str) -> Option<Reminder> {
        let reminder = self.repository.get(reminder_id);
        if reminder.is_none() {
            warn!("Reminder not found: {}", reminder_id);
        }
        reminder
    }

    pub fn create_reminder(&self, form: ReminderForm) -> Result<Reminder> {
        info!("Creating reminder: title={}, date={} {}", form.title, form.date, form.time);

        let input = ReminderInput::try_from(form)?;
        let reminder = self
            .repository
            .create(input)
            .context("Failed to save new reminder")?;

        info!("Created reminder: {} with ID: {}", reminder.title, reminder.id);
        Ok(reminder)
    }

    /// Overwrite a reminder's fields, keeping its completion state
    pub fn update_reminder(&self, reminder_id: &str, form: ReminderForm) -> Result<Option<Reminder>> {
        info!("Updating reminder: {}", reminder_id);

        let input = ReminderInput::try_from(form)?;
        self.repository
            .update(reminder_id, input)
            .with_context(|| format!("Failed to save reminder {}", reminder_id))
    }

    /// Flip `is_completed`; `Ok(None)` if the id is unknown
    pub fn toggle_completion(&self, reminder_id: &str) -> Result<Option<Reminder>> {
        let toggled = self
            .repository
            .modify(reminder_id, |reminder| reminder.is_completed = !reminder.is_completed)
            .with_context(|| format!("Failed to save reminder {}", reminder_id))?;

        if let Some(reminder) = &toggled {
            info!("Reminder {} completed: {}", reminder.id, reminder.is_completed);
        }
        Ok(toggled)
    }

    pub fn delete_reminder(&self, reminder_id: &str) -> Result<bool> {
        info!("Deleting reminder: {}", reminder_id);

        self.repository
            .delete(reminder_id)
            .with_context(|| format!("Failed to delete reminder {}", reminder_id))
    }
}
