// rest/routes/tasks.rs — Task CRUD routes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::model::{Task, TaskPatch};
use crate::service::TaskFilter;
use crate::AppContext;

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner_id: Option<u64>,
}

#[derive(Deserialize, Default)]
pub struct TaskListQuery {
    pub completed: Option<bool>,
    pub owner_id: Option<u64>,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let task = ctx
        .service
        .create_task(&body.title, body.description, body.owner_id)
        .await?;
    Ok(Json(task))
}

pub async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<TaskListQuery>,
) -> Json<Vec<Task>> {
    let filter = TaskFilter {
        completed: query.completed,
        owner_id: query.owner_id,
    };
    Json(ctx.service.list_tasks(filter).await)
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(ctx.service.get_task(id).await?))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(ctx.service.update_task(id, patch).await?))
}

pub async fn complete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(ctx.service.complete_task(id).await?))
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    ctx.service.delete_task(id).await?;
    Ok(Json(json!({ "deleted": true, "message": "task deleted" })))
}
