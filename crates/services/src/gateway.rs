//! The seam between listing/form pages and the network.
//!
//! Pages depend on this trait, not on `ResourceService`, so the page state
//! machines are testable against recording fakes.

use async_trait::async_trait;
use models::MutationOutcome;
use serde_json::Value;

/// One page of a server-side search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage<T> {
    pub items: Vec<T>,
    /// Only the paged listing shape carries a total; the free-text search
    /// paths usually do not.
    pub total_elements: Option<u64>,
}

impl<T> SearchPage<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_elements: None,
        }
    }
}

/// Uniform async contract of a resource service.
///
/// No method ever fails with an error: failures surface as `[]`, `None`
/// or `MutationOutcome { ok: false, .. }`.
#[async_trait]
pub trait EntityGateway<T>: Send + Sync {
    /// Fetch a listing. `None` page/size fetches the whole collection.
    async fn list(&self, page: Option<u32>, size: Option<u32>) -> Vec<T>;

    /// Server-side free-text search. An empty (trimmed) query resolves to
    /// an empty page without touching the network.
    async fn search(&self, query: &str, page: u32, size: u32) -> SearchPage<T>;

    async fn get(&self, id: i64) -> Option<T>;

    async fn create(&self, payload: Value) -> MutationOutcome;

    async fn update(&self, payload: Value) -> MutationOutcome;

    /// Delete by id. On success the gateway does **not** mutate any
    /// in-memory list; displayed state belongs to the caller, which is
    /// what makes the optimistic-delete flow possible.
    async fn remove(&self, id: i64) -> MutationOutcome;
}
