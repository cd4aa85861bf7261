//! Routing and root-level UI state.
//!
//! # Design
//! The theme lives on a `Shell` value owned by whoever drives the UI and is
//! handed to views by reference. There is no process-wide state.

use percent_encoding::percent_decode_str;

use crate::client::CustomerApi;
use crate::config::{encode_segment, ApiBase};
use crate::dialogs::Dialogs;
use crate::pages::{DetailPage, ListPage};
use crate::types::CustomerId;

/// User-facing locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/customers/{id}`
    Detail(CustomerId),
}

impl Route {
    /// Match an absolute path. Query strings and fragments are ignored and a
    /// single trailing slash is allowed; empty segments never match. The id
    /// segment is percent-decoded and kept opaque.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let rest = path.strip_prefix('/')?;
        if rest.is_empty() {
            return Some(Route::List);
        }
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            ["customers", id] if !id.is_empty() => {
                let id = percent_decode_str(id).decode_utf8().ok()?;
                Some(Route::Detail(CustomerId::from(id.into_owned())))
            }
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("/customers/{}", encode_segment(&id.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// A page instantiated for a route.
pub enum Page<A> {
    List(ListPage<A>),
    Detail(DetailPage<A>),
}

/// Root UI state: theme and the API base shown in page badges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shell {
    pub theme: Theme,
    pub api_base: ApiBase,
}

impl Shell {
    pub fn new(api_base: ApiBase) -> Self {
        Self {
            theme: Theme::default(),
            api_base,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Accessible label for the theme toggle.
    pub fn theme_toggle_label(&self) -> String {
        format!("Switch to {} mode", self.theme.toggled().as_str())
    }

    /// Badge text advertising the resolved API base.
    pub fn api_badge(&self) -> String {
        format!("API: {}", self.api_base.as_str())
    }

    /// Build the page for `route`. Pages start in their loading state; the
    /// caller mounts them.
    pub fn open<A: CustomerApi>(&self, route: Route, api: A, dialogs: Box<dyn Dialogs>) -> Page<A> {
        match route {
            Route::List => Page::List(ListPage::new(api, dialogs)),
            Route::Detail(id) => Page::Detail(DetailPage::new(api, Some(id))),
        }
    }
}
