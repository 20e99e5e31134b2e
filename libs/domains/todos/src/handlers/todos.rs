use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_helpers::{AppJson, ErrorResponse, IdPath};
use std::sync::Arc;

use crate::error::TodoResult;
use crate::models::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::repository::TodoRepository;
use crate::service::TodoService;

/// List all todos, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "todos",
    responses(
        (status = 200, description = "List of todos", body = Vec<Todo>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
) -> TodoResult<Json<Vec<Todo>>> {
    let todos = service.list_todos().await?;
    Ok(Json(todos))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "",
    tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Missing or blank title, or malformed JSON", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    AppJson(input): AppJson<CreateTodoRequest>,
) -> TodoResult<impl IntoResponse> {
    let todo = service.create_todo(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update the title and/or done flag of a todo
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "todos",
    params(
        ("id" = i32, Path, description = "Todo ID")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 400, description = "Invalid id, no fields, or invalid field type", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<UpdateTodoRequest>,
) -> TodoResult<impl IntoResponse> {
    let todo = service.update_todo(id, input).await?;
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "todos",
    params(
        ("id" = i32, Path, description = "Todo ID")
    ),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
) -> TodoResult<impl IntoResponse> {
    service.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
