use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::error::AppError;
use crate::model::{Todo, TodoInput};
use crate::service::TodoService;

pub(crate) async fn list_todos(
    State(service): State<TodoService>,
) -> Result<Json<Vec<Todo>>, AppError> {
    service.list().map(Json)
}

pub(crate) async fn get_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    service.get(&id).map(Json)
}

pub(crate) async fn create_todo(
    State(service): State<TodoService>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Json(input) = payload?;
    service.create(input).map(Json)
}

pub(crate) async fn update_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Json(input) = payload?;
    service.update(&id, input).map(Json)
}

pub(crate) async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    service.delete(&id).map(Json)
}
