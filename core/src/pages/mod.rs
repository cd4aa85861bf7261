//! Page controllers: the state behind the list and detail views.

pub mod detail;
pub mod list;

pub use detail::{DetailPage, DetailState};
pub use list::{DeleteOutcome, ListPage, ListState, ModalMode};

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::adapter::RequestResult;
    use crate::client::{CustomerApi, MISSING_ID};
    use crate::dialogs::Dialogs;
    use crate::error::ErrorInfo;
    use crate::types::{Customer, CustomerId, CustomerPayload};

    pub fn customer(id: u64, name: &str) -> Customer {
        Customer {
            id: CustomerId::from(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
        }
    }

    #[derive(Default)]
    struct Inner {
        customers: Vec<Customer>,
        next_id: u64,
        calls: HashMap<&'static str, usize>,
        failures: HashMap<&'static str, ErrorInfo>,
    }

    /// In-memory `CustomerApi` that counts calls and can fail on demand.
    #[derive(Clone, Default)]
    pub struct FakeApi {
        inner: Arc<Mutex<Inner>>,
    }

    impl FakeApi {
        pub fn with_customers(customers: Vec<Customer>) -> Self {
            let api = Self::default();
            {
                let mut inner = api.inner.lock().unwrap();
                inner.next_id = 100;
                inner.customers = customers;
            }
            api
        }

        /// Make the next call of `op` fail with `error`.
        pub fn fail_next(&self, op: &'static str, error: ErrorInfo) {
            self.inner.lock().unwrap().failures.insert(op, error);
        }

        pub fn calls(&self, op: &str) -> usize {
            self.inner.lock().unwrap().calls.get(op).copied().unwrap_or(0)
        }

        fn enter(&self, op: &'static str) -> Result<std::sync::MutexGuard<'_, Inner>, ErrorInfo> {
            let mut inner = self.inner.lock().unwrap();
            *inner.calls.entry(op).or_default() += 1;
            match inner.failures.remove(op) {
                Some(err) => Err(err),
                None => Ok(inner),
            }
        }
    }

    fn apply(customer: &mut Customer, payload: &CustomerPayload) {
        if let Some(name) = &payload.name {
            customer.name = name.clone();
        }
        if let Some(email) = &payload.email {
            customer.email = email.clone();
        }
        if let Some(phone) = &payload.phone {
            customer.phone = Some(phone.clone());
        }
    }

    #[async_trait]
    impl CustomerApi for FakeApi {
        async fn list(&self) -> Result<Vec<Customer>, ErrorInfo> {
            Ok(self.enter("list")?.customers.clone())
        }

        async fn get(&self, id: Option<&CustomerId>) -> RequestResult<Customer> {
            let id = id.ok_or_else(|| ErrorInfo::validation(MISSING_ID))?;
            let inner = self.enter("get")?;
            Ok(inner.customers.iter().find(|c| &c.id == id).cloned())
        }

        async fn create(&self, payload: &CustomerPayload) -> RequestResult<Customer> {
            let mut inner = self.enter("create")?;
            inner.next_id += 1;
            let mut created = customer(inner.next_id, "");
            apply(&mut created, payload);
            inner.customers.push(created.clone());
            Ok(Some(created))
        }

        async fn update(&self, id: Option<&CustomerId>, payload: &CustomerPayload) -> RequestResult<Customer> {
            let id = id.ok_or_else(|| ErrorInfo::validation(MISSING_ID))?;
            let mut inner = self.enter("update")?;
            let found = inner.customers.iter_mut().find(|c| &c.id == id);
            let Some(existing) = found else {
                return Err(ErrorInfo::http(404, "Customer not found"));
            };
            apply(existing, payload);
            Ok(Some(existing.clone()))
        }

        async fn delete(&self, id: Option<&CustomerId>) -> Result<(), ErrorInfo> {
            let id = id.ok_or_else(|| ErrorInfo::validation(MISSING_ID))?;
            let mut inner = self.enter("delete")?;
            inner.customers.retain(|c| &c.id != id);
            Ok(())
        }
    }

    /// `Dialogs` with a fixed confirmation answer that records every prompt.
    #[derive(Clone)]
    pub struct ScriptedDialogs {
        answer: bool,
        confirmations: Arc<Mutex<Vec<String>>>,
        alerts: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedDialogs {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                confirmations: Arc::default(),
                alerts: Arc::default(),
            }
        }

        pub fn confirmations(&self) -> Vec<String> {
            self.confirmations.lock().unwrap().clone()
        }

        pub fn alerts(&self) -> Vec<String> {
            self.alerts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Dialogs for ScriptedDialogs {
        async fn confirm(&self, message: &str) -> bool {
            self.confirmations.lock().unwrap().push(message.to_string());
            self.answer
        }

        async fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_string());
        }
    }
}
