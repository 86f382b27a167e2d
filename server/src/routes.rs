//! Axum handlers for `/todos`.
//!
//! Handlers take the lock, call one store operation and map the result.
//! Bodies are extracted as `Result<Json<_>, JsonRejection>` so malformed JSON
//! gets the same error envelope as validation failures.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::ApiError;
use crate::model::{Todo, TodoCreateRequest, TodoId, TodoUpdateRequest};
use crate::store::SharedStore;

pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let todos = store.read().await.list();
    tracing::debug!(count = todos.len(), "listed todos");
    Json(todos)
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<TodoCreateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let todo = store.write().await.create(&input)?;
    tracing::info!(id = todo.id, title = %todo.title, priority = %todo.priority, "created todo");
    let location = format!("/todos/{}", todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.read().await.get(id)?;
    Ok(Json(todo))
}

pub async fn replace_todo(
    State(store): State<SharedStore>,
    Path(id): Path<TodoId>,
    payload: Result<Json<TodoCreateRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(input) = payload?;
    let todo = store.write().await.replace(id, &input)?;
    tracing::info!(id, title = %todo.title, "replaced todo");
    Ok(Json(todo))
}

pub async fn patch_todo(
    State(store): State<SharedStore>,
    Path(id): Path<TodoId>,
    payload: Result<Json<TodoUpdateRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(input) = payload?;
    let todo = store.write().await.patch(id, &input)?;
    tracing::info!(id, title = %todo.title, "patched todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    store.write().await.delete(id)?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
