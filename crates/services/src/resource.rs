//! Generic REST resource service.
//!
//! One instance per entity, all sharing the same method contract. Response
//! shapes are normalized through `models::envelope`; no method lets an
//! error cross the boundary.

use std::{
    marker::PhantomData,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use models::{MutationOutcome, envelope};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::ServiceError,
    gateway::{EntityGateway, SearchPage},
    http::HttpClient,
};

pub struct ResourceService<D, U> {
    http: HttpClient,
    path: &'static str,
    label: &'static str,
    loading: Arc<AtomicBool>,
    _marker: PhantomData<fn(D) -> U>,
}

impl<D, U> Clone for ResourceService<D, U> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            path: self.path,
            label: self.label,
            loading: self.loading.clone(),
            _marker: PhantomData,
        }
    }
}

impl<D, U> ResourceService<D, U>
where
    D: DeserializeOwned + Send + Sync,
    U: From<D> + Send + Sync,
{
    pub fn new(http: HttpClient, path: &'static str, label: &'static str) -> Self {
        Self {
            http,
            path,
            label,
            loading: Arc::new(AtomicBool::new(false)),
            _marker: PhantomData,
        }
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
    }

    fn parse_items(&self, body: &Value) -> Vec<U> {
        envelope::extract_items(body)
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<D>(item) {
                Ok(dto) => Some(U::from(dto)),
                Err(e) => {
                    warn!(entity = self.label, error = %e, "skipping malformed listing item");
                    None
                }
            })
            .collect()
    }

    fn mutation_outcome(&self, body: &Value) -> MutationOutcome {
        if envelope::is_success(body) {
            MutationOutcome::success(None, envelope::extract_id(body))
        } else {
            MutationOutcome {
                ok: false,
                message: Some(envelope::extract_message(
                    body,
                    crate::error::GENERIC_ERROR_MESSAGE,
                )),
                id: None,
                field_errors: envelope::field_errors(body),
            }
        }
    }

    /// Convert a transport-level failure into the page-facing outcome.
    ///
    /// Message priority: backend field error description, then the backend
    /// message field, then the error's own user message. The order is a
    /// contract; the UI shows the most specific message available.
    fn mutation_failure(&self, e: ServiceError) -> MutationOutcome {
        let fallback = e.user_message();
        if let ServiceError::Http { ref body, .. } = e {
            if let Ok(parsed) = serde_json::from_str::<Value>(body) {
                return MutationOutcome {
                    ok: false,
                    message: Some(envelope::extract_message(&parsed, fallback)),
                    id: None,
                    field_errors: envelope::field_errors(&parsed),
                };
            }
        }
        MutationOutcome::failure(fallback)
    }

    async fn guarded<F, T>(&self, fut: F) -> T
    where
        F: Future<Output = T>,
    {
        self.loading.store(true, Ordering::Relaxed);
        let out = fut.await;
        self.loading.store(false, Ordering::Relaxed);
        out
    }
}

#[async_trait]
impl<D, U> EntityGateway<U> for ResourceService<D, U>
where
    D: DeserializeOwned + Send + Sync,
    U: From<D> + Send + Sync,
{
    async fn list(&self, page: Option<u32>, size: Option<u32>) -> Vec<U> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = size {
            query.push(("size", size.to_string()));
        }
        let result = self.guarded(self.http.get_json(self.path, &query)).await;
        match result {
            Ok(body) => self.parse_items(&body),
            Err(e) => {
                warn!(entity = self.label, error = %e, "listing failed");
                Vec::new()
            }
        }
    }

    async fn search(&self, query: &str, page: u32, size: u32) -> SearchPage<U> {
        // A blank query box that debounced must never turn into a
        // full-table scan on the backend.
        if query.trim().is_empty() {
            return SearchPage::empty();
        }
        let path = format!("{}/buscar", self.path);
        let params = [
            ("q", query.trim().to_string()),
            ("page", page.to_string()),
            ("size", size.to_string()),
        ];
        let result = self.guarded(self.http.get_json(&path, &params)).await;
        match result {
            Ok(body) => SearchPage {
                items: self.parse_items(&body),
                total_elements: envelope::extract_total_elements(&body),
            },
            Err(e) => {
                warn!(entity = self.label, query = %query, error = %e, "search failed");
                SearchPage::empty()
            }
        }
    }

    async fn get(&self, id: i64) -> Option<U> {
        let path = format!("{}/{id}", self.path);
        let result = self.guarded(self.http.get_json(&path, &[])).await;
        let body = match result {
            Ok(body) => body,
            Err(e) => {
                debug!(entity = self.label, id, error = %e, "get failed");
                return None;
            }
        };
        // The record may arrive bare or wrapped under `data`.
        let candidate = body.get("data").cloned().unwrap_or(body);
        serde_json::from_value::<D>(candidate).ok().map(U::from)
    }

    async fn create(&self, payload: Value) -> MutationOutcome {
        let result = self.guarded(self.http.post_json(self.path, &payload)).await;
        match result {
            Ok(body) => self.mutation_outcome(&body),
            Err(e) => {
                warn!(entity = self.label, error = %e, "create failed");
                self.mutation_failure(e)
            }
        }
    }

    async fn update(&self, payload: Value) -> MutationOutcome {
        let result = self.guarded(self.http.put_json(self.path, &payload)).await;
        match result {
            Ok(body) => self.mutation_outcome(&body),
            Err(e) => {
                warn!(entity = self.label, error = %e, "update failed");
                self.mutation_failure(e)
            }
        }
    }

    async fn remove(&self, id: i64) -> MutationOutcome {
        let path = format!("{}/{id}", self.path);
        let result = self.guarded(self.http.delete_json(&path)).await;
        match result {
            Ok(Value::Null) => MutationOutcome::success(None, None),
            Ok(body) => self.mutation_outcome(&body),
            Err(e) => {
                warn!(entity = self.label, id, error = %e, "delete failed");
                self.mutation_failure(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use models::product::{ProductDto, ProductUi};

    use super::*;
    use crate::{session_store::SessionStore, storage::LocalStorage};

    fn unreachable_service() -> (tempfile::TempDir, ResourceService<ProductDto, ProductUi>) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("storage.json"));
        let session = SessionStore::hydrate(storage);
        let http = HttpClient::new("http://127.0.0.1:1", session).unwrap();
        (dir, ResourceService::new(http, "/productos", "producto"))
    }

    #[tokio::test]
    async fn empty_search_short_circuits() {
        // Base URL is unroutable on purpose: a blank query must resolve
        // before the network is ever involved.
        let (_dir, service) = unreachable_service();
        assert_eq!(service.search("", 0, 10).await, SearchPage::empty());
        assert_eq!(service.search("   ", 0, 10).await, SearchPage::empty());
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn listing_failure_yields_empty_vec() {
        let (_dir, service) = unreachable_service();
        assert!(service.list(None, None).await.is_empty());
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn get_failure_yields_none() {
        let (_dir, service) = unreachable_service();
        assert_eq!(service.get(7).await, None);
    }

    #[tokio::test]
    async fn create_failure_yields_outcome_not_panic() {
        let (_dir, service) = unreachable_service();
        let outcome = service.create(serde_json::json!({"nombre": "x"})).await;
        assert!(!outcome.ok);
        assert!(outcome.message.is_some());
    }

    #[test]
    fn mutation_outcome_success_variants() {
        let (_dir, service) = unreachable_service();
        let ok = service.mutation_outcome(&serde_json::json!({
            "dataResponse": {"idTx": null, "response": "SUCCESS"}, "data": {"id": 12}
        }));
        assert!(ok.ok);
        assert_eq!(ok.id, Some(12));

        let failed = service.mutation_outcome(&serde_json::json!({
            "dataResponse": {"idTx": null, "response": "ERROR"},
            "error": [{"codError": "V1", "descError": "nombre requerido", "msgError": "nombre"}]
        }));
        assert!(!failed.ok);
        assert_eq!(failed.message.as_deref(), Some("nombre requerido"));
        assert_eq!(failed.field_errors.len(), 1);
    }

    #[test]
    fn http_error_body_feeds_the_message_chain() {
        let (_dir, service) = unreachable_service();
        let outcome = service.mutation_failure(ServiceError::Http {
            status: 422,
            body: r#"{"message": "categoria en uso"}"#.to_string(),
        });
        assert_eq!(outcome.message.as_deref(), Some("categoria en uso"));

        // Unparseable body falls through to the error's own message.
        let outcome = service.mutation_failure(ServiceError::Http {
            status: 500,
            body: "<html>".to_string(),
        });
        assert_eq!(
            outcome.message.as_deref(),
            Some(crate::error::GENERIC_ERROR_MESSAGE)
        );

        let outcome = service.mutation_failure(ServiceError::Timeout);
        assert_eq!(
            outcome.message.as_deref(),
            Some(crate::error::TIMEOUT_ERROR_MESSAGE)
        );
    }
}
