//! Contents of the create/edit customer modal.

use crate::types::{Customer, CustomerPayload};

/// Editable form fields, kept as the raw text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CustomerForm {
    /// Seed the fields from an existing record, or blank for a new one.
    pub fn from_customer(customer: Option<&Customer>) -> Self {
        match customer {
            Some(c) => Self {
                name: c.name.clone(),
                email: c.email.clone(),
                phone: c.phone.clone().unwrap_or_default(),
            },
            None => Self::default(),
        }
    }

    /// Trimmed payload. Every field is sent, empty or not; the backend
    /// decides what is valid.
    pub fn to_payload(&self) -> CustomerPayload {
        CustomerPayload {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
        }
    }
}
