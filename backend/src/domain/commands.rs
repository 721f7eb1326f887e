//! Domain-level input types.
//!
//! The presentation layer sends the form DTOs from the `shared` crate; the
//! services validate those into these typed inputs before anything reaches a
//! collection. Each input carries every editable field of its record, which
//! makes it both the create payload and the full-overwrite patch.

pub mod customer {
    #[derive(Debug, Clone, PartialEq)]
    pub struct CustomerInput {
        pub name: String,
        pub mobile: String,
        pub area: String,
        pub notes: String,
    }
}

pub mod contract {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ContractInput {
        pub title: String,
        pub customer_name: String,
        pub description: String,
        /// Finite and non-negative
        pub amount: f64,
        pub date: String,
    }
}

pub mod reminder {
    /// Completion state is not part of the input: it starts `false` and only
    /// changes through an explicit toggle.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ReminderInput {
        pub title: String,
        pub description: String,
        pub date: String,
        pub time: String,
    }
}

pub mod expense {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ExpenseInput {
        pub title: String,
        pub category: String,
        pub amount: f64,
        pub date: String,
        pub notes: String,
    }
}
