//! Client core for the customer manager.
//!
//! # Overview
//! A typed client for the `/api/customers` REST resource plus the page
//! controllers that drive the list and detail views. Nothing here renders;
//! a UI reads page state and the projections in [`view`], and forwards user
//! actions to the pages.
//!
//! # Design
//! - `CustomerClient` splits every operation into `build_*` (produces an
//!   `HttpRequest`) and `parse_*` (consumes an `HttpResponse`); only a
//!   `Transport` does I/O.
//! - The request adapter folds every outcome into
//!   `Result<Option<T>, ErrorInfo>`; nothing below a page panics or throws.
//! - Pages depend on the `CustomerApi` and `Dialogs` traits, so their state
//!   machines are tested with in-memory fakes.
//! - Root UI state (theme) is an explicit `Shell` value.

pub mod adapter;
pub mod app;
pub mod client;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod form;
pub mod http;
pub mod loading;
pub mod pages;
pub mod transport;
pub mod types;
pub mod view;

pub use adapter::{perform, Payload, RequestResult};
pub use app::{Page, Route, Shell, Theme};
pub use client::{CustomerApi, CustomerClient};
pub use config::ApiBase;
pub use dialogs::{AutoConfirm, Dialogs};
pub use error::{ErrorInfo, ErrorKind, TransportError};
pub use form::CustomerForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use loading::{with_loading, Loaded};
pub use pages::{DeleteOutcome, DetailPage, DetailState, ListPage, ListState, ModalMode};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Customer, CustomerId, CustomerPayload};

/// Client over HTTP against the base URL from the environment.
pub fn default_client() -> CustomerClient<ReqwestTransport> {
    CustomerClient::new(ApiBase::from_env(), ReqwestTransport::new())
}
