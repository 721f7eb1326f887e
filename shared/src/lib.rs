use serde::{Deserialize, Deserializer, Serialize};

/// A customer record as persisted under the `customers` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Epoch-millisecond string assigned at creation
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub area: String,
    #[serde(default)]
    pub notes: String,
    /// RFC 3339 UTC timestamp, set once at creation
    pub created_at: String,
}

/// A contract (sale) record as persisted under the `contracts` key.
///
/// `customer_name` is a denormalized copy of the customer's name; there is no
/// reference to a customer id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub title: String,
    pub customer_name: String,
    #[serde(default)]
    pub description: String,
    /// Non-negative contract value
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub created_at: String,
}

/// A reminder record as persisted under the `reminders` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Wall-clock time, `HH:MM`
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub is_completed: bool,
    pub created_at: String,
}

/// An expense record as persisted under the `expenses` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
}

/// Accepts a JSON number or `null` for an amount field.
///
/// Browser-era data stored `NaN` amounts, which JSON encodes as `null`.
/// Those load as `0.0` instead of failing the whole collection.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Form values for creating or editing a customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub mobile: String,
    pub area: String,
    pub notes: String,
}

/// Form values for creating or editing a contract.
///
/// `amount` is the raw text of the amount field: a decimal number or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractForm {
    pub title: String,
    pub customer_name: String,
    pub description: String,
    pub amount: String,
    pub date: String,
}

/// Form values for creating or editing a reminder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
}

/// Form values for creating or editing an expense
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub title: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub notes: String,
}

/// Query for any of the list views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRequest {
    /// Case-insensitive substring; empty matches everything
    pub search_term: String,
}

impl ListRequest {
    pub fn search(term: impl Into<String>) -> Self {
        Self { search_term: term.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerListResponse {
    pub customers: Vec<Customer>,
}

/// Contracts in display order (newest first) with the total of the listed amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractListResponse {
    pub contracts: Vec<Contract>,
    pub total_amount: f64,
}

/// Reminders in display order (chronological)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderListResponse {
    pub reminders: Vec<Reminder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
    pub total_amount: f64,
}

/// Counts and totals shown on the dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub customers: usize,
    pub reminders: usize,
    pub contracts: usize,
    pub income: f64,
    pub expenses: f64,
    pub net_profit: f64,
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    /// Reminders due on the requested day, chronological
    pub todays_reminders: Vec<Reminder>,
    /// Most recent contracts by date, newest first
    pub latest_contracts: Vec<Contract>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_uses_camel_case_field_names() {
        let contract = Contract {
            id: "1704067200000".to_string(),
            title: "Website".to_string(),
            customer_name: "Acme".to_string(),
            description: String::new(),
            amount: 100.0,
            date: "2024-01-01".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&contract).unwrap();
        assert_eq!(json["customerName"], "Acme");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["amount"], 100.0);
    }

    #[test]
    fn test_null_amount_loads_as_zero() {
        let json = r#"{"id":"1","title":"T","customerName":"C","description":"",
            "amount":null,"date":"2024-01-01","createdAt":"2024-01-01T00:00:00.000Z"}"#;
        let contract: Contract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.amount, 0.0);
    }

    #[test]
    fn test_missing_amount_loads_as_zero() {
        let json = r#"{"id":"1","title":"Paper","date":"2024-01-01","createdAt":"x"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.category, "");
    }

    #[test]
    fn test_reminder_completion_defaults_false() {
        let json = r#"{"id":"1","title":"Call","description":"","date":"2024-01-01",
            "time":"09:00","createdAt":"x"}"#;
        let reminder: Reminder = serde_json::from_str(json).unwrap();
        assert!(!reminder.is_completed);

        let round = serde_json::to_value(&reminder).unwrap();
        assert_eq!(round["isCompleted"], false);
    }
}
