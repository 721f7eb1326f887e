//! Read-only summary across all four collections, shown on the home screen.

use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use shared::{Contract, Customer, DashboardStats, DashboardSummary, Expense, Reminder};

use crate::domain::models::{contract_amount, contract_date, due_on, expense_amount};
use crate::domain::record_store;
use crate::storage::{LocalStorage, RecordRepository};

/// Number of contracts in the "latest contracts" panel
pub const LATEST_CONTRACTS_LIMIT: usize = 5;

#[derive(Clone)]
pub struct DashboardService {
    customers: RecordRepository<Customer>,
    contracts: RecordRepository<Contract>,
    reminders: RecordRepository<Reminder>,
    expenses: RecordRepository<Expense>,
}

impl DashboardService {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            customers: RecordRepository::new(storage.clone()),
            contracts: RecordRepository::new(storage.clone()),
            reminders: RecordRepository::new(storage.clone()),
            expenses: RecordRepository::new(storage),
        }
    }

    pub fn stats(&self) -> DashboardStats {
        let contracts = self.contracts.list();
        let expenses = self.expenses.list();
        Self::build_stats(
            self.customers.list().len(),
            self.reminders.list().len(),
            &contracts,
            &expenses,
        )
    }

    /// Counts, totals, reminders due on `today` and the most recent contracts
    pub fn summary(&self, today: NaiveDate) -> DashboardSummary {
        let customers = self.customers.list();
        let contracts = self.contracts.list();
        let reminders = self.reminders.list();
        let expenses = self.expenses.list();

        let stats = Self::build_stats(customers.len(), reminders.len(), &contracts, &expenses);

        let todays_reminders = due_on(&reminders, today);

        let mut latest_contracts = record_store::sort_by_date(&contracts, contract_date, false);
        latest_contracts.truncate(LATEST_CONTRACTS_LIMIT);

        info!(
            "Dashboard for {}: {} customers, {} contracts, net profit {:.2}",
            today, stats.customers, stats.contracts, stats.net_profit
        );

        DashboardSummary {
            stats,
            todays_reminders,
            latest_contracts,
        }
    }

    fn build_stats(
        customers: usize,
        reminders: usize,
        contracts: &[Contract],
        expenses: &[Expense],
    ) -> DashboardStats {
        let income = record_store::sum(contracts, contract_amount);
        let total_expenses = record_store::sum(expenses, expense_amount);

        DashboardStats {
            customers,
            reminders,
            contracts: contracts.len(),
            income,
            expenses: total_expenses,
            net_profit: income - total_expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract_service::ContractService;
    use crate::domain::expense_service::ExpenseService;
    use crate::domain::reminder_service::ReminderService;
    use crate::storage::MemoryStorage;
    use shared::{ContractForm, ExpenseForm, ReminderForm};

    fn contract(title: &str, amount: &str, date: &str) -> ContractForm {
        ContractForm {
            title: title.to_string(),
            customer_name: "Acme".to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = DashboardService::new(Arc::new(MemoryStorage::new()));

        let summary = dashboard.summary(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert_eq!(summary.stats, DashboardStats::default());
        assert!(summary.todays_reminders.is_empty());
        assert!(summary.latest_contracts.is_empty());
    }

    #[test]
    fn test_summary_totals_and_panels() {
        let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::new());
        let contracts = ContractService::new(storage.clone());
        let expenses = ExpenseService::new(storage.clone());
        let reminders = ReminderService::new(storage.clone());
        let dashboard = DashboardService::new(storage);

        for month in 1..=6 {
            let date = format!("2024-{:02}-01", month);
            contracts
                .create_contract(contract(&format!("C{}", month), "100", &date))
                .unwrap();
        }
        expenses
            .create_expense(ExpenseForm {
                title: "Rent".to_string(),
                amount: "250".to_string(),
                ..Default::default()
            })
            .unwrap();
        reminders
            .create_reminder(ReminderForm {
                title: "Today".to_string(),
                date: "2024-06-15".to_string(),
                time: "09:00".to_string(),
                ..Default::default()
            })
            .unwrap();
        reminders
            .create_reminder(ReminderForm {
                title: "Tomorrow".to_string(),
                date: "2024-06-16".to_string(),
                ..Default::default()
            })
            .unwrap();

        let summary = dashboard.summary(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());

        assert_eq!(summary.stats.contracts, 6);
        assert_eq!(summary.stats.reminders, 2);
        assert_eq!(summary.stats.customers, 0);
        assert_eq!(summary.stats.income, 600.0);
        assert_eq!(summary.stats.expenses, 250.0);
        assert_eq!(summary.stats.net_profit, 350.0);
        assert_eq!(dashboard.stats(), summary.stats);

        let latest: Vec<&str> = summary.latest_contracts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(latest, vec!["C6", "C5", "C4", "C3", "C2"]);

        assert_eq!(summary.todays_reminders.len(), 1);
        assert_eq!(summary.todays_reminders[0].title, "Today");
    }
}
