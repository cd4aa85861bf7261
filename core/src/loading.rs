//! Loading-state helper for one-off async calls.
//!
//! Callers that need a live spinner keep their own flag while the future is
//! pending; `with_loading` only reports the terminal state.

use std::future::Future;

use crate::error::ErrorInfo;

/// Terminal state of a wrapped operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<ErrorInfo>,
}

impl<T> Loaded<T> {
    pub fn into_result(self) -> Result<Option<T>, ErrorInfo> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

/// Await `op` and fold its outcome into a `Loaded`.
pub async fn with_loading<T, E, F, Fut>(op: F) -> Loaded<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<ErrorInfo>,
{
    match op().await {
        Ok(data) => Loaded {
            loading: false,
            data: Some(data),
            error: None,
        },
        Err(err) => Loaded {
            loading: false,
            data: None,
            error: Some(err.into()),
        },
    }
}
