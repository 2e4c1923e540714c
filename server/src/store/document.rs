use std::path::Path;

use sled::{Db, Tree};

use super::{StoreResult, TodoStore};
use crate::model::Todo;

const COLLECTION: &str = "todos";

/// Disk-backed store using sled. Each record is a JSON document keyed by its
/// id in the `todos` tree; every mutation is flushed before returning.
pub struct DocumentStore {
    db: Db,
    todos: Tree,
}

impl DocumentStore {
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = sled::open(path)?;
        let todos = db.open_tree(COLLECTION)?;
        Ok(Self { db, todos })
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> StoreResult<()> {
        self.db.flush()?;
        Ok(())
    }

    fn decode(bytes: &[u8]) -> StoreResult<Todo> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl TodoStore for DocumentStore {
    fn find_all(&self) -> StoreResult<Vec<Todo>> {
        self.todos
            .iter()
            .map(|entry| {
                let (_, value) = entry?;
                Self::decode(&value)
            })
            .collect()
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        self.todos
            .get(id.as_bytes())?
            .map(|value| Self::decode(&value))
            .transpose()
    }

    fn save(&self, todo: Todo) -> StoreResult<Todo> {
        let value = serde_json::to_vec(&todo)?;
        self.todos.insert(todo.id.as_bytes(), value)?;
        self.todos.flush()?;
        Ok(todo)
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let removed = self.todos.remove(id.as_bytes())?.is_some();
        if removed {
            self.todos.flush()?;
        }
        Ok(removed)
    }

    fn exists_by_id(&self, id: &str) -> StoreResult<bool> {
        Ok(self.todos.contains_key(id.as_bytes())?)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.todos.len())
    }

    fn delete_all(&self) -> StoreResult<()> {
        self.todos.clear()?;
        self.todos.flush()?;
        Ok(())
    }
}
