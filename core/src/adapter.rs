//! Request adapter: one HTTP call in, one normalized result out.
//!
//! # Design
//! `perform` never fails observably except through its return value. It is
//! split into `prepare` (header defaults), the transport round-trip, and
//! `normalize`, which is pure so every status/body combination can be tested
//! without a network.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ErrorInfo;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Outcome of one request: `Ok(Some(data))`, `Ok(None)` for an empty success
/// such as 204, or `Err(error)`.
pub type RequestResult<T> = Result<Option<T>, ErrorInfo>;

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

/// Add `content-type: application/json` when a body is present and the
/// caller did not set a content type.
pub fn prepare(mut request: HttpRequest) -> HttpRequest {
    if request.body.is_some() && request.header("content-type").is_none() {
        request
            .headers
            .push(("content-type".to_string(), "application/json".to_string()));
    }
    request
}

/// Execute `request` and normalize the outcome.
pub async fn perform<T: Transport + ?Sized>(transport: &T, request: HttpRequest) -> RequestResult<Payload> {
    let request = prepare(request);
    let method = request.method;
    let url = request.url.clone();
    debug!(%method, %url, "sending request");

    match transport.execute(request).await {
        Ok(response) => {
            debug!(%method, %url, status = response.status, "received response");
            normalize(response)
        }
        Err(err) => {
            warn!(%method, %url, error = %err, "request failed before a response was received");
            Err(err.into())
        }
    }
}

/// Map a raw response onto the uniform result shape.
pub fn normalize(response: HttpResponse) -> RequestResult<Payload> {
    if !response.is_success() {
        let message = error_message(&response);
        return Err(ErrorInfo::http(response.status, message));
    }

    if response.status == 204 {
        return Ok(None);
    }

    if response.is_json() {
        let value: Value = serde_json::from_str(&response.body)?;
        return Ok(Some(Payload::Json(value)));
    }

    Ok(Some(Payload::Text(response.body)))
}

/// Best-effort error text: JSON `detail`, then `message`, then the whole JSON
/// body, then plain text, then a generic status line.
fn error_message(response: &HttpResponse) -> String {
    let fallback = format!("Request failed with status {}", response.status);

    if response.is_json() {
        let Ok(body) = serde_json::from_str::<Value>(&response.body) else {
            return fallback;
        };
        for field in ["detail", "message"] {
            if let Some(value) = body.get(field).filter(|v| is_truthy(v)) {
                return display_value(value);
            }
        }
        return body.to_string();
    }

    if response.body.is_empty() {
        fallback
    } else {
        response.body.clone()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
