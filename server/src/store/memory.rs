use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{StoreResult, TodoStore};
use crate::model::Todo;

/// In-memory store. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    todos: RwLock<BTreeMap<String, Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    fn find_all(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.todos.read().values().cloned().collect())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        Ok(self.todos.read().get(id).cloned())
    }

    fn save(&self, todo: Todo) -> StoreResult<Todo> {
        self.todos.write().insert(todo.id.clone(), todo.clone());
        Ok(todo)
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        Ok(self.todos.write().remove(id).is_some())
    }

    fn exists_by_id(&self, id: &str) -> StoreResult<bool> {
        Ok(self.todos.read().contains_key(id))
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.todos.read().len())
    }

    fn delete_all(&self) -> StoreResult<()> {
        self.todos.write().clear();
        Ok(())
    }
}
