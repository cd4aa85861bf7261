//! Single-customer page reached through `/customers/{id}`.

use tracing::{info, warn};

use crate::client::CustomerApi;
use crate::error::ErrorInfo;
use crate::form::CustomerForm;
use crate::types::{Customer, CustomerId, CustomerPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    /// `None` after a clean fetch means the record does not exist.
    pub customer: Option<Customer>,
    pub loading: bool,
    pub error: Option<ErrorInfo>,
    pub modal_open: bool,
    pub form: CustomerForm,
    pub form_error: Option<ErrorInfo>,
    pub submitting: bool,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            customer: None,
            loading: true,
            error: None,
            modal_open: false,
            form: CustomerForm::default(),
            form_error: None,
            submitting: false,
        }
    }
}

pub struct DetailPage<A> {
    api: A,
    id: Option<CustomerId>,
    state: DetailState,
}

impl<A: CustomerApi> DetailPage<A> {
    pub fn new(api: A, id: Option<CustomerId>) -> Self {
        Self {
            api,
            id,
            state: DetailState::default(),
        }
    }

    pub fn id(&self) -> Option<&CustomerId> {
        self.id.as_ref()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn form_mut(&mut self) -> &mut CustomerForm {
        &mut self.state.form
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.api.get(self.id.as_ref()).await {
            Ok(customer) => {
                if customer.is_none() {
                    info!(id = ?self.id, "customer not found");
                }
                self.state.customer = customer;
            }
            Err(err) => {
                warn!(id = ?self.id, error = %err, "failed to load customer");
                self.state.error = Some(err);
                self.state.customer = None;
            }
        }

        self.state.loading = false;
    }

    /// Open the edit modal seeded from the loaded record.
    pub fn open_edit(&mut self) {
        self.state.form = CustomerForm::from_customer(self.state.customer.as_ref());
        self.state.form_error = None;
        self.state.submitting = false;
        self.state.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.state.modal_open = false;
    }

    pub async fn submit_form(&mut self) -> Result<(), ErrorInfo> {
        let payload = self.state.form.to_payload();
        self.submit(payload).await
    }

    /// Update the loaded record. Does nothing when no record is loaded.
    pub async fn submit(&mut self, payload: CustomerPayload) -> Result<(), ErrorInfo> {
        let Some(id) = self.state.customer.as_ref().map(|c| c.id.clone()) else {
            return Ok(());
        };

        self.state.submitting = true;
        self.state.form_error = None;
        let result = self.api.update(Some(&id), &payload).await;
        self.state.submitting = false;

        match result {
            Ok(_) => {
                info!(%id, "updated customer");
                self.state.modal_open = false;
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                warn!(%id, error = %err, "failed to update customer");
                self.state.form_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Page heading: the name, else `Customer #<id>`, else `Customer`.
    pub fn title(&self) -> String {
        match &self.state.customer {
            Some(c) if !c.name.is_empty() => c.name.clone(),
            Some(c) => format!("Customer #{}", c.id),
            None => "Customer".to_string(),
        }
    }
}
