use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use shared::{Contract, ContractForm, ContractListResponse, ListRequest};

use crate::domain::commands::contract::ContractInput;
use crate::domain::models::{contract_amount, contract_date, CONTRACT_SEARCH_FIELDS};
use crate::domain::record_store;
use crate::storage::{LocalStorage, RecordRepository};

/// Service for managing contracts and sales
#[derive(Clone)]
pub struct ContractService {
    repository: RecordRepository<Contract>,
}

impl ContractService {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            repository: RecordRepository::new(storage),
        }
    }

    /// List contracts matching the search term, newest first, with the total
    /// of the listed amounts
    pub fn list_contracts(&self, request: &ListRequest) -> ContractListResponse {
        let contracts = self.repository.list();
        let filtered = record_store::search(&contracts, &request.search_term, CONTRACT_SEARCH_FIELDS);
        let contracts = record_store::sort_by_date(&filtered, contract_date, false);
        let total_amount = record_store::sum(&contracts, contract_amount);

        info!(
            "Found {} contracts totalling {:.2} for search '{}'",
            contracts.len(),
            total_amount,
            request.search_term
        );
        ContractListResponse {
            contracts,
            total_amount,
        }
    }

    pub fn get_contract(&self, contract_id: &str) -> Option<Contract> {
        let contract = self.repository.get(contract_id);
        if contract.is_none() {
            warn!("Contract not found: {}", contract_id);
        }
        contract
    }

    pub fn create_contract(&self, form: ContractForm) -> Result<Contract> {
        info!("Creating contract: title={}, amount={:?}", form.title, form.amount);

        let input = ContractInput::try_from(form)?;
        let contract = self
            .repository
            .create(input)
            .context("Failed to save new contract")?;

        info!("Created contract: {} with ID: {}", contract.title, contract.id);
        Ok(contract)
    }

    /// Overwrite a contract's fields; `Ok(None)` if the id is unknown
    pub fn update_contract(&self, contract_id: &str, form: ContractForm) -> Result<Option<Contract>> {
        info!("Updating contract: {}", contract_id);

        let input = ContractInput::try_from(form)?;
        self.repository
            .update(contract_id, input)
            .with_context(|| format!("Failed to save contract {}", contract_id))
    }

    pub fn delete_contract(&self, contract_id: &str) -> Result<bool> {
        info!("Deleting contract: {}", contract_id);

        self.repository
            .delete(contract_id)
            .with_context(|| format!("Failed to delete contract {}", contract_id))
    }
}
