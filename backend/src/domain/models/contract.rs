use shared::{Contract, ContractForm};

use crate::domain::commands::contract::ContractInput;
use crate::domain::record_store::{FieldSelector, Record};
use crate::domain::validation::{
    optional_date, optional_text, parse_amount, required_text, ValidationError,
};

pub const CONTRACTS_KEY: &str = "contracts";

fn title(contract: &Contract) -> &str {
    &contract.title
}

fn customer_name(contract: &Contract) -> &str {
    &contract.customer_name
}

fn description(contract: &Contract) -> &str {
    &contract.description
}

/// Fields the contract list search looks at
pub const CONTRACT_SEARCH_FIELDS: &[FieldSelector<Contract>] =
    &[title, customer_name, description];

/// Sort key for contract ordering
pub fn contract_date(contract: &Contract) -> String {
    contract.date.clone()
}

pub fn contract_amount(contract: &Contract) -> Option<f64> {
    Some(contract.amount)
}

impl Record for Contract {
    type Input = ContractInput;
    const COLLECTION_KEY: &'static str = CONTRACTS_KEY;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, created_at: String, input: ContractInput) -> Self {
        Contract {
            id,
            title: input.title,
            customer_name: input.customer_name,
            description: input.description,
            amount: input.amount,
            date: input.date,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ContractInput) {
        self.title = patch.title;
        self.customer_name = patch.customer_name;
        self.description = patch.description;
        self.amount = patch.amount;
        self.date = patch.date;
    }
}

impl TryFrom<ContractForm> for ContractInput {
    type Error = ValidationError;

    fn try_from(form: ContractForm) -> Result<Self, Self::Error> {
        Ok(ContractInput {
            title: required_text("Title", &form.title)?,
            customer_name: optional_text("Customer name", &form.customer_name)?,
            description: form.description.trim().to_string(),
            amount: parse_amount(&form.amount)?,
            date: optional_date(&form.date)?,
        })
    }
}
