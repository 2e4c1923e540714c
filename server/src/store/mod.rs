//! Persistence for todo records.
//!
//! # Design
//! `TodoStore` is the only seam between the HTTP layer and storage. It is
//! object-safe and synchronous so it can be shared as `Arc<dyn TodoStore>`
//! across axum handlers. `save` is an upsert and `delete_by_id` on a missing
//! id is a no-op; stricter rules (rejecting updates to unknown ids) belong to
//! `TodoService`, not to the store.

mod document;
mod memory;

pub use document::DocumentStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::model::Todo;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(#[from] sled::Error),
    #[error("stored document could not be encoded or decoded: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A single collection of `Todo` records keyed by id.
pub trait TodoStore: Send + Sync {
    /// Every stored record, ordered by id.
    fn find_all(&self) -> StoreResult<Vec<Todo>>;

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>>;

    /// Insert `todo`, replacing any record with the same id. Returns the
    /// record as stored.
    fn save(&self, todo: Todo) -> StoreResult<Todo>;

    /// Remove the record under `id`. Returns whether one was present.
    fn delete_by_id(&self, id: &str) -> StoreResult<bool>;

    fn exists_by_id(&self, id: &str) -> StoreResult<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }

    fn count(&self) -> StoreResult<usize>;

    fn delete_all(&self) -> StoreResult<()>;
}
