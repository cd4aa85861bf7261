//! Domain DTOs for the customer API.
//!
//! # Design
//! Ids are assigned by the backend and treated as opaque. They are accepted
//! as JSON numbers or strings and serialized back in the shape they arrived
//! in. List responses are canonically a bare array; the `{"items": [...]}`
//! envelope is tolerated and collapsed into the same `Vec<Customer>` before
//! it reaches page state.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use tracing::warn;

use crate::error::ErrorInfo;

/// Backend-assigned customer identifier.
///
/// Equality and hashing go through the textual form, so an id read from a
/// route (`"42"`) matches the numeric id the API returned (`42`). Any JSON
/// number is kept as-is, including negative and fractional ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerId {
    Number(Number),
    Text(String),
}

impl PartialEq for CustomerId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CustomerId::Number(a), CustomerId::Number(b)) => a == b,
            (CustomerId::Text(a), CustomerId::Text(b)) => a == b,
            (CustomerId::Number(n), CustomerId::Text(t)) | (CustomerId::Text(t), CustomerId::Number(n)) => {
                *t == n.to_string()
            }
        }
    }
}

impl Eq for CustomerId {}

impl Hash for CustomerId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerId::Number(n) => write!(f, "{n}"),
            CustomerId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        CustomerId::Number(Number::from(id))
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        CustomerId::Text(id.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        CustomerId::Text(id)
    }
}

/// A customer record returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Customer {
    /// Name when present, otherwise the id; used in prompts and labels.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.id.to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Body sent on create and update. Absent fields are omitted from the JSON;
/// the backend decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Collapse a successful list body into a sequence of customers.
///
/// A bare array is decoded directly. An object yields its `items` array, or
/// nothing when there is none. Any other shape is an empty list.
pub fn customers_from_list_body(body: Option<Value>) -> Result<Vec<Customer>, ErrorInfo> {
    match body {
        Some(Value::Array(items)) => decode_items(items),
        Some(Value::Object(mut map)) => match map.remove("items") {
            Some(Value::Array(items)) => decode_items(items),
            _ => {
                warn!("list response object carried no items array");
                Ok(Vec::new())
            }
        },
        Some(other) => {
            warn!(body = %other, "unexpected list response shape");
            Ok(Vec::new())
        }
        None => Ok(Vec::new()),
    }
}

fn decode_items(items: Vec<Value>) -> Result<Vec<Customer>, ErrorInfo> {
    Ok(serde_json::from_value(Value::Array(items))?)
}
