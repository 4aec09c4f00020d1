//! HTTP handlers for the todo endpoints.
//!
//! Body and path extraction failures arrive as `Result`s so they can be
//! turned into `ApiError` responses instead of axum's default rejections.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::model::{CreateTodo, DeleteConfirmation, Todo, TodoPatch, Welcome};
use crate::store::TodoStore;

/// An update body must be a non-empty JSON object. Unknown keys, including
/// `id` and `createdAt`, are accepted and ignored.
fn todo_patch(payload: Result<Json<Value>, JsonRejection>) -> Result<TodoPatch, ApiError> {
    match payload {
        Ok(Json(Value::Object(body))) if !body.is_empty() => {
            serde_json::from_value(Value::Object(body)).map_err(|_| ApiError::invalid_json())
        }
        _ => Err(ApiError::invalid_json()),
    }
}

/// A non-integer `{id}` segment behaves like an unmatched route.
fn todo_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::RouteNotFound)
}

#[tracing::instrument]
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the doTask API!",
        info: "Use the /todos endpoint to manage your tasks.",
    })
}

#[tracing::instrument(skip(store))]
pub async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

#[tracing::instrument(skip(store, payload))]
pub async fn create_todo(
    State(store): State<TodoStore>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(_) => ApiError::missing_task(),
        _ => ApiError::invalid_json(),
    })?;
    let todo = store.create(input.task).await;
    tracing::info!(id = todo.id(), "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[tracing::instrument(skip(store))]
pub async fn get_todo(
    State(store): State<TodoStore>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = todo_id(path)?;
    store.get(id).await.map(Json).ok_or(ApiError::TodoNotFound)
}

#[tracing::instrument(skip(store, payload))]
pub async fn update_todo(
    State(store): State<TodoStore>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = todo_id(path)?;
    let patch = match todo_patch(payload) {
        Ok(patch) => patch,
        // An unknown id wins over a bad body.
        Err(err) => {
            return Err(if store.contains(id).await {
                err
            } else {
                ApiError::TodoNotFound
            })
        }
    };
    store
        .update_if_exists(id, |todo| patch.apply(todo))
        .await
        .map(Json)
        .ok_or(ApiError::TodoNotFound)
}

#[tracing::instrument(skip(store))]
pub async fn delete_todo(
    State(store): State<TodoStore>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let id = todo_id(path)?;
    store.remove(id).await.ok_or(ApiError::TodoNotFound)?;
    tracing::info!(id, "deleted todo");
    Ok(Json(DeleteConfirmation::for_id(id)))
}

pub async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}
