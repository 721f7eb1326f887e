use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use shared::{Customer, CustomerForm, CustomerListResponse, ListRequest};

use crate::domain::commands::customer::CustomerInput;
use crate::domain::models::CUSTOMER_SEARCH_FIELDS;
use crate::domain::record_store;
use crate::storage::{LocalStorage, RecordRepository};

/// Service for managing customers
#[derive(Clone)]
pub struct CustomerService {
    repository: RecordRepository<Customer>,
}

impl CustomerService {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            repository: RecordRepository::new(storage),
        }
    }

    /// List customers matching the search term, in storage order
    pub fn list_customers(&self, request: &ListRequest) -> CustomerListResponse {
        let customers = self.repository.list();
        let customers = record_store::search(&customers, &request.search_term, CUSTOMER_SEARCH_FIELDS);

        info!("Found {} customers for search '{}'", customers.len(), request.search_term);
        CustomerListResponse { customers }
    }

    pub fn get_customer(&self, customer_id: &str) -> Option<Customer> {
        let customer = self.repository.get(customer_id);
        if customer.is_none() {
            warn!("Customer not found: {}", customer_id);
        }
        customer
    }

    pub fn create_customer(&self, form: CustomerForm) -> Result<Customer> {
        info!("Creating customer: name={}", form.name);

        let input = CustomerInput::try_from(form)?;
        let customer = self
            .repository
            .create(input)
            .context("Failed to save new customer")?;

        info!("Created customer: {} with ID: {}", customer.name, customer.id);
        Ok(customer)
    }

    /// Overwrite a customer's fields; `Ok(None)` if the id is unknown
    pub fn update_customer(&self, customer_id: &str, form: CustomerForm) -> Result<Option<Customer>> {
        info!("Updating customer: {}", customer_id);

        let input = CustomerInput::try_from(form)?;
        self.repository
            .update(customer_id, input)
            .with_context(|| format!("Failed to save customer {}", customer_id))
    }

    /// Delete a customer; returns whether it existed
    pub fn delete_customer(&self, customer_id: &str) -> Result<bool> {
        info!("Deleting customer: {}", customer_id);

        self.repository
            .delete(customer_id)
            .with_context(|| format!("Failed to delete customer {}", customer_id))
    }
}
