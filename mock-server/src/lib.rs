use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCustomer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    customers: BTreeMap<u64, Customer>,
}

pub type Db = Arc<RwLock<Store>>;

/// JSON error body in the `{"detail": ...}` shape clients read messages from.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: "Customer not found".to_string(),
        }
    }

    fn invalid(detail: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: detail.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/customers", get(list_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn validate(name: &str, email: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::invalid("Name is required"));
    }
    if !email.contains('@') {
        return Err(ApiError::invalid("A valid email is required"));
    }
    Ok(())
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

async fn list_customers(State(db): State<Db>) -> Json<Vec<Customer>> {
    let store = db.read().await;
    Json(store.customers.values().cloned().collect())
}

async fn create_customer(
    State(db): State<Db>,
    Json(input): Json<CreateCustomer>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    validate(&input.name, &input.email)?;
    let mut store = db.write().await;
    store.next_id += 1;
    let customer = Customer {
        id: store.next_id,
        name: input.name,
        email: input.email,
        phone: blank_to_none(input.phone),
    };
    store.customers.insert(customer.id, customer.clone());
    info!(id = customer.id, "created customer");
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customer(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Customer>, ApiError> {
    let store = db.read().await;
    store
        .customers
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

async fn update_customer(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateCustomer>,
) -> Result<Json<Customer>, ApiError> {
    let mut store = db.write().await;
    let customer = store.customers.get_mut(&id).ok_or_else(ApiError::not_found)?;

    let name = input.name.unwrap_or_else(|| customer.name.clone());
    let email = input.email.unwrap_or_else(|| customer.email.clone());
    validate(&name, &email)?;

    customer.name = name;
    customer.email = email;
    if input.phone.is_some() {
        customer.phone = blank_to_none(input.phone);
    }
    info!(id, "updated customer");
    Ok(Json(customer.clone()))
}

async fn delete_customer(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store
        .customers
        .remove(&id)
        .map(|_| {
            info!(id, "deleted customer");
            StatusCode::NO_CONTENT
        })
        .ok_or_else(ApiError::not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_serializes_without_absent_phone() {
        let customer = Customer {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json, json!({"id": 1, "name": "Ada", "email": "ada@example.com"}));
    }

    #[test]
    fn create_customer_fields_default_to_empty() {
        let input: CreateCustomer = serde_json::from_str(r#"{"email":"a@b"}"#).unwrap();
        assert_eq!(input.name, "");
        assert!(input.phone.is_none());
    }

    #[test]
    fn update_customer_all_fields_optional() {
        let input: UpdateCustomer = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_none());
        assert!(input.email.is_none());
        assert!(input.phone.is_none());
    }

    #[test]
    fn validation_rejects_blank_name_and_bad_email() {
        assert!(validate("Ada", "ada@example.com").is_ok());
        assert_eq!(validate("  ", "ada@example.com").unwrap_err().detail, "Name is required");
        assert_eq!(validate("Ada", "nope").unwrap_err().detail, "A valid email is required");
    }

    #[test]
    fn blank_phone_is_dropped() {
        assert_eq!(blank_to_none(Some(" ".to_string())), None);
        assert_eq!(blank_to_none(Some("555".to_string())), Some("555".to_string()));
    }
}
