//! Request-level rules on top of a `TodoStore`.
//!
//! # Design
//! The store is permissive: `save` upserts and deleting a missing id is a
//! no-op. `TodoService` is where the stricter HTTP contract lives: updates
//! and deletes of unknown ids are rejected with `AppError::NotFound`.

use std::sync::Arc;

use tracing::info;

use crate::error::AppError;
use crate::model::{Todo, TodoInput};
use crate::store::TodoStore;

/// Cheap to clone; used directly as axum router state.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.store.find_all()?)
    }

    pub fn get(&self, id: &str) -> Result<Todo, AppError> {
        self.store
            .find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Persist a new todo. A client-supplied id that already exists is
    /// overwritten.
    pub fn create(&self, input: TodoInput) -> Result<Todo, AppError> {
        let todo = self.store.save(input.into_new_todo())?;
        info!(id = %todo.id, "created todo");
        Ok(todo)
    }

    /// Replace every field of the todo under `id`. Unknown ids are rejected
    /// and nothing is written.
    pub fn update(&self, id: &str, input: TodoInput) -> Result<Todo, AppError> {
        if !self.store.exists_by_id(id)? {
            return Err(AppError::NotFound(id.to_string()));
        }
        let todo = self.store.save(input.into_replacement(id))?;
        info!(%id, "updated todo");
        Ok(todo)
    }

    /// Remove the todo under `id`, returning the record that was removed.
    pub fn delete(&self, id: &str) -> Result<Todo, AppError> {
        let todo = self.get(id)?;
        // Another request may have removed it since the read.
        if !self.store.delete_by_id(id)? {
            return Err(AppError::NotFound(id.to_string()));
        }
        info!(%id, "deleted todo");
        Ok(todo)
    }
}
