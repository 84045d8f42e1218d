use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::dtos::CreateTodoRequest;
use crate::models::Todo;
use crate::startup::AppState;
use service_core::error::AppError;

/// List all todos ordered by ascending id.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.db.list_todos().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list todos");
        e
    })?;

    Ok(Json(todos))
}

/// Create a todo from a validated request body.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let todo = state
        .db
        .create_todo(&req.title, req.description.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create todo");
            e
        })?;

    Ok((StatusCode::CREATED, Json(todo)))
}
