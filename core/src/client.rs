//! Resource client for `/api/customers`.
//!
//! # Design
//! Each CRUD operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, so
//! URL shapes and decoding can be checked without I/O. The async methods of
//! `CustomerApi` join the two halves through the request adapter. Operations
//! addressing one record take `Option<&CustomerId>` and reject a missing id
//! before anything is sent.

use async_trait::async_trait;
use tracing::debug;

use crate::adapter::{self, normalize, Payload, RequestResult};
use crate::config::{encode_segment, ApiBase};
use crate::error::ErrorInfo;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{customers_from_list_body, Customer, CustomerId, CustomerPayload};

pub const MISSING_ID: &str = "Customer id is required";

/// CRUD operations over customer records, as seen by the pages.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>, ErrorInfo>;

    async fn get(&self, id: Option<&CustomerId>) -> RequestResult<Customer>;

    async fn create(&self, payload: &CustomerPayload) -> RequestResult<Customer>;

    async fn update(&self, id: Option<&CustomerId>, payload: &CustomerPayload) -> RequestResult<Customer>;

    async fn delete(&self, id: Option<&CustomerId>) -> Result<(), ErrorInfo>;
}

/// `CustomerApi` over HTTP.
#[derive(Debug, Clone)]
pub struct CustomerClient<T> {
    base: ApiBase,
    transport: T,
}

impl<T: Transport> CustomerClient<T> {
    pub fn new(base: ApiBase, transport: T) -> Self {
        Self { base, transport }
    }

    /// Base URL requests are sent to, for display.
    pub fn api_base(&self) -> &ApiBase {
        &self.base
    }

    fn collection_url(&self) -> String {
        self.base.api_url("customers")
    }

    fn record_url(&self, id: &CustomerId) -> String {
        self.base
            .api_url(&format!("customers/{}", encode_segment(&id.to_string())))
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get(&self, id: &CustomerId) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.record_url(id))
    }

    pub fn build_create(&self, payload: &CustomerPayload) -> Result<HttpRequest, ErrorInfo> {
        let mut request = HttpRequest::new(HttpMethod::Post, self.collection_url());
        request.body = Some(encode_payload(payload)?);
        Ok(request)
    }

    pub fn build_update(&self, id: &CustomerId, payload: &CustomerPayload) -> Result<HttpRequest, ErrorInfo> {
        let mut request = HttpRequest::new(HttpMethod::Put, self.record_url(id));
        request.body = Some(encode_payload(payload)?);
        Ok(request)
    }

    pub fn build_delete(&self, id: &CustomerId) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.record_url(id))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Customer>, ErrorInfo> {
        decode_list(normalize(response)?)
    }

    pub fn parse_record(&self, response: HttpResponse) -> RequestResult<Customer> {
        decode_record(normalize(response)?)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ErrorInfo> {
        normalize(response).map(|_| ())
    }

    async fn send(&self, request: HttpRequest) -> RequestResult<Payload> {
        adapter::perform(&self.transport, request).await
    }
}

#[async_trait]
impl<T: Transport> CustomerApi for CustomerClient<T> {
    async fn list(&self) -> Result<Vec<Customer>, ErrorInfo> {
        let payload = self.send(self.build_list()).await?;
        decode_list(payload)
    }

    async fn get(&self, id: Option<&CustomerId>) -> RequestResult<Customer> {
        let id = require_id(id)?;
        decode_record(self.send(self.build_get(id)).await?)
    }

    async fn create(&self, payload: &CustomerPayload) -> RequestResult<Customer> {
        let request = self.build_create(payload)?;
        decode_record(self.send(request).await?)
    }

    async fn update(&self, id: Option<&CustomerId>, payload: &CustomerPayload) -> RequestResult<Customer> {
        let id = require_id(id)?;
        let request = self.build_update(id, payload)?;
        decode_record(self.send(request).await?)
    }

    async fn delete(&self, id: Option<&CustomerId>) -> Result<(), ErrorInfo> {
        let id = require_id(id)?;
        self.send(self.build_delete(id)).await.map(|_| ())
    }
}

fn require_id(id: Option<&CustomerId>) -> Result<&CustomerId, ErrorInfo> {
    id.ok_or_else(|| {
        debug!("rejected request without a customer id");
        ErrorInfo::validation(MISSING_ID)
    })
}

fn encode_payload(payload: &CustomerPayload) -> Result<String, ErrorInfo> {
    serde_json::to_string(payload)
        .map_err(|e| ErrorInfo::validation(format!("could not encode customer payload: {e}")))
}

fn decode_list(payload: Option<Payload>) -> Result<Vec<Customer>, ErrorInfo> {
    match payload {
        Some(Payload::Json(value)) => customers_from_list_body(Some(value)),
        Some(Payload::Text(text)) => customers_from_list_body(Some(serde_json::Value::String(text))),
        None => customers_from_list_body(None),
    }
}

fn decode_record(payload: Option<Payload>) -> RequestResult<Customer> {
    match payload {
        None | Some(Payload::Json(serde_json::Value::Null)) => Ok(None),
        Some(Payload::Json(value)) => Ok(Some(serde_json::from_value(value)?)),
        Some(Payload::Text(_)) => Err(ErrorInfo::transport(
            "malformed response: expected a JSON customer record",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::transport::test_support::{json, Scripted};

    fn client_with(transport: Scripted) -> CustomerClient<Scripted> {
        CustomerClient::new(ApiBase::new("http://localhost:3001/"), transport)
    }

    fn client() -> CustomerClient<Scripted> {
        client_with(Scripted::default())
    }

    #[test]
    fn build_list_targets_collection() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3001/api/customers");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_encodes_the_id() {
        let req = client().build_get(&CustomerId::from("a/b c"));
        assert_eq!(req.url, "http://localhost:3001/api/customers/a%2Fb%20c");
        let req = client().build_get(&CustomerId::from(5));
        assert_eq!(req.url, "http://localhost:3001/api/customers/5");
    }

    #[test]
    fn build_create_serializes_payload_as_given() {
        let payload = CustomerPayload {
            name: Some("Ada".to_string()),
            email: None,
            phone: None,
        };
        let req = client().build_create(&payload).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3001/api/customers");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Ada"}));
    }

    #[test]
    fn build_update_and_delete_target_the_record() {
        let id = CustomerId::from(3);
        let req = client().build_update(&id, &CustomerPayload::default()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3001/api/customers/3");
        assert_eq!(req.body.as_deref(), Some("{}"));

        let req = client().build_delete(&id);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_record_null_body_is_not_found() {
        assert_eq!(client().parse_record(json(200, "null")), Ok(None));
    }

    #[test]
    fn parse_record_text_body_is_malformed() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "hello".to_string(),
        };
        let err = client().parse_record(response).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
    }

    #[test]
    fn parse_delete_accepts_json_body() {
        assert!(client().parse_delete(json(200, r#"{"deleted":true}"#)).is_ok());
    }

    #[tokio::test]
    async fn missing_id_never_reaches_the_transport() {
        let client = client();
        let payload = CustomerPayload::default();

        let err = client.get(None).await.unwrap_err();
        assert_eq!(err.message, MISSING_ID);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.status, None);

        assert_eq!(client.update(None, &payload).await.unwrap_err().kind, ErrorKind::Validation);
        assert_eq!(client.delete(None).await.unwrap_err().kind, ErrorKind::Validation);
        assert!(client.transport.seen().is_empty());
    }

    #[tokio::test]
    async fn create_sends_json_content_type() {
        let client = client_with(Scripted::replying(json(201, r#"{"id":9,"name":"Ada","email":"ada@x"}"#)));
        let payload = CustomerPayload {
            name: Some("Ada".to_string()),
            email: Some("ada@x".to_string()),
            phone: None,
        };

        let created = client.create(&payload).await.unwrap().unwrap();
        assert_eq!(created.id, CustomerId::from(9));

        let seen = client.transport.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn list_accepts_envelope() {
        let client = client_with(Scripted::replying(json(200, r#"{"items":[{"id":1,"name":"A"}]}"#)));
        let customers = client.list().await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "A");
    }

    #[tokio::test]
    async fn transport_failure_becomes_an_error_value() {
        let client = client();
        let err = client.list().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(err.status, None);
        assert!(err.message.contains("connection refused"));
    }

    #[tokio::test]
    async fn delete_no_content_succeeds() {
        let client = client_with(Scripted::replying(HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        }));
        assert!(client.delete(Some(&CustomerId::from(3))).await.is_ok());
    }
}
