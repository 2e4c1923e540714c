//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! so the client carries no Axum or storage dependencies. The integration
//! test catches any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub what_to_do: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for creating a todo. Leave `id` as `None` to have the
/// server assign one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub what_to_do: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for replacing an existing todo. Every field is sent;
/// the server has no partial-update semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoFields {
    pub name: String,
    pub what_to_do: String,
    pub completed: bool,
}
