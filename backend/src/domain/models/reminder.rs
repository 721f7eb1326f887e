use chrono::NaiveDate;
use shared::{Reminder, ReminderForm};

use crate::domain::commands::reminder::ReminderInput;
use crate::domain::record_store::{self, FieldSelector, Record};
use crate::domain::validation::{optional_date, optional_time, required_text, ValidationError};

pub const REMINDERS_KEY: &str = "reminders";

fn title(reminder: &Reminder) -> &str {
    &reminder.title
}

fn description(reminder: &Reminder) -> &str {
    &reminder.description
}

/// Fields the reminder list search looks at
pub const REMINDER_SEARCH_FIELDS: &[FieldSelector<Reminder>] = &[title, description];

/// Sort key combining the reminder's date and time (`2024-01-01T09:30`)
pub fn reminder_due(reminder: &Reminder) -> String {
    if reminder.time.trim().is_empty() {
        reminder.date.clone()
    } else {
        format!("{}T{}", reminder.date.trim(), reminder.time.trim())
    }
}

/// Reminders dated `day`, earliest first
pub fn due_on(reminders: &[Reminder], day: NaiveDate) -> Vec<Reminder> {
    let day = day.format("%Y-%m-%d").to_string();
    let due: Vec<Reminder> = reminders
        .iter()
        .filter(|reminder| reminder.date.trim() == day)
        .cloned()
        .collect();
    record_store::sort_by_date(&due, reminder_due, true)
}

impl Record for Reminder {
    type Input = ReminderInput;
    const COLLECTION_KEY: &'static str = REMINDERS_KEY;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, created_at: String, input: ReminderInput) -> Self {
        Reminder {
            id,
            title: input.title,
            description: input.description,
            date: input.date,
            time: input.time,
            is_completed: false,
            created_at,
        }
    }

    /// `is_completed` survives edits
    fn apply_patch(&mut self, patch: ReminderInput) {
        self.title = patch.title;
        self.description = patch.description;
        self.date = patch.date;
        self.time = patch.time;
    }
}

impl TryFrom<ReminderForm> for ReminderInput {
    type Error = ValidationError;

    fn try_from(form: ReminderForm) -> Result<Self, Self::Error> {
        Ok(ReminderInput {
            title: required_text("Title", &form.title)?,
            description: form.description.trim().to_string(),
            date: optional_date(&form.date)?,
            time: optional_time(&form.time)?,
        })
    }
}
