//! Customer list page: table, create/edit modal, delete.
//!
//! # Design
//! `ListPage` owns its state outright and every action takes `&mut self`, so
//! actions on one page run one at a time. The modal mode carries the record
//! being edited, which makes "edit mode without a target" unrepresentable.

use tracing::{info, warn};

use crate::client::CustomerApi;
use crate::dialogs::Dialogs;
use crate::error::ErrorInfo;
use crate::form::CustomerForm;
use crate::types::{Customer, CustomerPayload};

/// What the modal will do on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit(Customer),
}

impl ModalMode {
    pub fn editing_target(&self) -> Option<&Customer> {
        match self {
            ModalMode::Create => None,
            ModalMode::Edit(customer) => Some(customer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub error: Option<ErrorInfo>,
    pub modal_open: bool,
    pub mode: ModalMode,
    pub form: CustomerForm,
    /// Inline error shown inside the open modal.
    pub form_error: Option<ErrorInfo>,
    pub submitting: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            loading: true,
            error: None,
            modal_open: false,
            mode: ModalMode::Create,
            form: CustomerForm::default(),
            form_error: None,
            submitting: false,
        }
    }
}

/// Result of a delete request from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    Deleted,
    Failed(ErrorInfo),
}

pub struct ListPage<A> {
    api: A,
    dialogs: Box<dyn Dialogs>,
    state: ListState,
}

impl<A: CustomerApi> ListPage<A> {
    pub fn new(api: A, dialogs: Box<dyn Dialogs>) -> Self {
        Self {
            api,
            dialogs,
            state: ListState::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Mutable access to the form fields while the modal is open.
    pub fn form_mut(&mut self) -> &mut CustomerForm {
        &mut self.state.form
    }

    /// Initial load when the page is shown.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.api.list().await {
            Ok(customers) => {
                info!(count = customers.len(), "loaded customers");
                self.state.customers = customers;
            }
            Err(err) => {
                warn!(error = %err, status = ?err.status, "failed to load customers");
                self.state.error = Some(err);
                self.state.customers.clear();
            }
        }

        self.state.loading = false;
    }

    pub fn open_create(&mut self) {
        self.open_modal(ModalMode::Create);
    }

    pub fn open_edit(&mut self, customer: Customer) {
        self.open_modal(ModalMode::Edit(customer));
    }

    fn open_modal(&mut self, mode: ModalMode) {
        self.state.form = CustomerForm::from_customer(mode.editing_target());
        self.state.form_error = None;
        self.state.submitting = false;
        self.state.mode = mode;
        self.state.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.state.modal_open = false;
    }

    /// Submit the current form contents.
    pub async fn submit_form(&mut self) -> Result<(), ErrorInfo> {
        let payload = self.state.form.to_payload();
        self.submit(payload).await
    }

    /// Create or update depending on the modal mode. On failure the modal
    /// stays open with the error inline and the list is untouched.
    pub async fn submit(&mut self, payload: CustomerPayload) -> Result<(), ErrorInfo> {
        self.state.submitting = true;
        self.state.form_error = None;

        let target = self.state.mode.editing_target().map(|c| c.id.clone());
        let result = match &target {
            Some(id) => self.api.update(Some(id), &payload).await,
            None => self.api.create(&payload).await,
        };
        self.state.submitting = false;

        match result {
            Ok(_) => {
                info!(edit = target.is_some(), "saved customer");
                self.state.modal_open = false;
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to save customer");
                self.state.form_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Delete after confirmation. Failures are reported through a blocking
    /// alert and leave the page state as it was.
    pub async fn delete(&mut self, customer: &Customer) -> DeleteOutcome {
        let prompt = format!("Delete customer \"{}\"?", customer.label());
        if !self.dialogs.confirm(&prompt).await {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete(Some(&customer.id)).await {
            Ok(()) => {
                info!(id = %customer.id, "deleted customer");
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                warn!(id = %customer.id, error = %err, "failed to delete customer");
                self.dialogs
                    .alert(&format!("Failed to delete: {}", err.message))
                    .await;
                DeleteOutcome::Failed(err)
            }
        }
    }
}
