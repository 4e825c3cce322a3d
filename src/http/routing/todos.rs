use axum::{extract::{rejection::{JsonRejection, PathRejection}, Path, State}, routing::get, Json, Router};
use axum::http::StatusCode;

use crate::{
    application::todo_service::TodoService,
    domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo},
    http::types::ApiError,
};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/todos/:id", get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, path: Result<Path<String>, PathRejection>) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.service.get(path_id(path)?).await?))
}

async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoId>), ApiError> {
    let Json(input) = payload?;
    let todo = state.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo.id)))
}

async fn update_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = path_id(path)?;
    let Json(input) = payload?;
    Ok(Json(state.service.update(id, input).await?))
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, path: Result<Path<String>, PathRejection>) -> Result<StatusCode, ApiError> {
    state.service.delete(path_id(path)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn path_id(path: Result<Path<String>, PathRejection>) -> Result<TodoId, ApiError> {
    let Path(id) = path?;
    Ok(TodoId(id))
}
