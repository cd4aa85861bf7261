//! Render-ready projections of page state.
//!
//! Renderers draw these values verbatim; none of the wording below lives in a
//! renderer.

use crate::pages::{DetailState, ListState, ModalMode};
use crate::types::Customer;

const EMPTY_CELL: &str = "-";

pub const NOT_FOUND_HEADING: &str = "Customer not found";
pub const NOT_FOUND_HELP: &str = "The requested customer does not exist.";
pub const EMPTY_LIST_HEADING: &str = "No customers found";
pub const EMPTY_LIST_HELP: &str = "Use the \u{201c}New Customer\u{201d} button to add your first one.";

/// One table row; text cells fall back to `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: format!("#{}", c.id),
            name: or_dash(&c.name),
            email: or_dash(&c.email),
            phone: or_dash(c.phone.as_deref().unwrap_or_default()),
        }
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Failed(String),
    Empty,
    Rows(Vec<CustomerRow>),
}

pub fn table_view(state: &ListState) -> TableView {
    if state.loading {
        return TableView::Loading;
    }
    if let Some(err) = &state.error {
        return TableView::Failed(format!("Failed to load customers: {}", err.message));
    }
    if state.customers.is_empty() {
        return TableView::Empty;
    }
    TableView::Rows(state.customers.iter().map(CustomerRow::from).collect())
}

/// Banner above the table when the list could not be fetched.
pub fn list_banner(state: &ListState) -> Option<String> {
    state
        .error
        .as_ref()
        .map(|err| format!("Could not load customers from API: {}", err.message))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Loading,
    Failed(String),
    NotFound,
    Loaded(CustomerRow),
}

pub fn detail_view(state: &DetailState) -> DetailView {
    if state.loading {
        return DetailView::Loading;
    }
    if let Some(err) = &state.error {
        return DetailView::Failed(format!("Could not load customer: {}", err.message));
    }
    match &state.customer {
        Some(customer) => DetailView::Loaded(CustomerRow::from(customer)),
        None => DetailView::NotFound,
    }
}

/// Heading and submit label of the create/edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub error: Option<String>,
}

fn modal_view(editing: bool, submitting: bool, error: Option<String>) -> ModalView {
    let submit_label = match (submitting, editing) {
        (true, _) => "Saving\u{2026}",
        (false, true) => "Save Changes",
        (false, false) => "Create",
    };
    ModalView {
        title: if editing { "Edit Customer" } else { "New Customer" },
        submit_label,
        error,
    }
}

/// The list page modal, or `None` while it is closed.
pub fn list_modal(state: &ListState) -> Option<ModalView> {
    state.modal_open.then(|| {
        modal_view(
            matches!(state.mode, ModalMode::Edit(_)),
            state.submitting,
            state.form_error.as_ref().map(|e| e.message.clone()),
        )
    })
}

/// The detail page modal, which always edits.
pub fn detail_modal(state: &DetailState) -> Option<ModalView> {
    state.modal_open.then(|| {
        modal_view(
            true,
            state.submitting,
            state.form_error.as_ref().map(|e| e.message.clone()),
        )
    })
}
