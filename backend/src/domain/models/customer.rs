use shared::{Customer, CustomerForm};

use crate::domain::commands::customer::CustomerInput;
use crate::domain::record_store::{FieldSelector, Record};
use crate::domain::validation::{optional_text, required_text, ValidationError};

pub const CUSTOMERS_KEY: &str = "customers";

fn name(customer: &Customer) -> &str {
    &customer.name
}

fn mobile(customer: &Customer) -> &str {
    &customer.mobile
}

fn area(customer: &Customer) -> &str {
    &customer.area
}

/// Fields the customer list search looks at
pub const CUSTOMER_SEARCH_FIELDS: &[FieldSelector<Customer>] = &[name, mobile, area];

impl Record for Customer {
    type Input = CustomerInput;
    const COLLECTION_KEY: &'static str = CUSTOMERS_KEY;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, created_at: String, input: CustomerInput) -> Self {
        Customer {
            id,
            name: input.name,
            mobile: input.mobile,
            area: input.area,
            notes: input.notes,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: CustomerInput) {
        self.name = patch.name;
        self.mobile = patch.mobile;
        self.area = patch.area;
        self.notes = patch.notes;
    }
}

impl TryFrom<CustomerForm> for CustomerInput {
    type Error = ValidationError;

    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        Ok(CustomerInput {
            name: required_text("Name", &form.name)?,
            mobile: optional_text("Mobile", &form.mobile)?,
            area: optional_text("Area", &form.area)?,
            notes: form.notes.trim().to_string(),
        })
    }
}
