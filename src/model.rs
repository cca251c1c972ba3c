// model.rs — User and Task records plus their partial-update payloads.

use serde::{Deserialize, Serialize};

/// A registered user. The identifier is assigned by the store on creation
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// A task, optionally owned by a user. Ownership is a weak reference by id:
/// it is checked at create/update time but carries no lifecycle of its own
/// beyond the cascade on user deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
}

/// Partial update for a user. Absent fields are left untouched; present
/// fields are re-validated before anything mutates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

/// Partial update for a task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub owner_id: Option<u64>,
}
