//! The Todo entity and the request body accepted by create and update.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored todo item. Serialized as `{"id", "name", "whatToDo", "completed"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub what_to_do: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        what_to_do: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            what_to_do: what_to_do.into(),
            completed,
        }
    }
}

/// Request payload for `POST /` and `PUT /{id}`.
///
/// `id` may be omitted on create, in which case the server assigns one.
/// On update the path id wins and any id in the body is ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub what_to_do: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoInput {
    /// The record to persist for a create. Blank or missing ids get a fresh UUID.
    pub fn into_new_todo(self) -> Todo {
        let id = match self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        Todo {
            id,
            name: self.name,
            what_to_do: self.what_to_do,
            completed: self.completed,
        }
    }

    /// The record that replaces the one stored under `id`.
    pub fn into_replacement(self, id: &str) -> Todo {
        Todo {
            id: id.to_string(),
            name: self.name,
            what_to_do: self.what_to_do,
            completed: self.completed,
        }
    }
}
