//! Wire and domain types for todo items.
//!
//! # Design
//! `Todo` keeps `id` and `created_at` private so only the store can set
//! them; handlers and patches can reach `task` and `is_completed` through
//! setters alone. Request bodies get dedicated types: `CreateTodo` requires
//! `task`, `TodoPatch` holds independently optional fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single todo item as stored and returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: u64,
    task: String,
    is_completed: bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    pub(crate) fn new(id: u64, task: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            task,
            is_completed: false,
            created_at,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_task(&mut self, task: String) {
        self.task = task;
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.is_completed = completed;
    }
}

/// Request body for `POST /todos`.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub task: String,
}

/// Request body for `PUT /todos/{id}`.
///
/// `None` means the field was absent from the JSON. An explicit `null` is a
/// deserialization error rather than a silent no-op.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default, deserialize_with = "present")]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub is_completed: Option<bool>,
}

impl TodoPatch {
    /// Overwrite the fields present in the patch, leaving the rest alone.
    pub fn apply(self, todo: &mut Todo) {
        if let Some(task) = self.task {
            todo.set_task(task);
        }
        if let Some(completed) = self.is_completed {
            todo.set_completed(completed);
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub info: &'static str,
}

/// Body of a successful `DELETE /todos/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn for_id(id: u64) -> Self {
        Self {
            message: format!("Todo with id {id} deleted successfully"),
        }
    }
}
