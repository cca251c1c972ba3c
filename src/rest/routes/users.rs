// rest/routes/users.rs — User CRUD routes.
//
// Success is 200 + the resource as JSON. Validation failures become 400 and
// missing identifiers 404, both via the `ApiError` IntoResponse impl.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::model::{User, UserPatch};
use crate::AppContext;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
}

pub async fn create_user(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = ctx
        .service
        .create_user(&body.name, &body.email, body.age)
        .await?;
    Ok(Json(user))
}

pub async fn list_users(State(ctx): State<Arc<AppContext>>) -> Json<Vec<User>> {
    Json(ctx.service.list_users().await)
}

pub async fn get_user(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(ctx.service.get_user(id).await?))
}

pub async fn update_user(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(ctx.service.update_user(id, patch).await?))
}

pub async fn delete_user(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    ctx.service.delete_user(id).await?;
    Ok(Json(json!({ "deleted": true, "message": "user deleted" })))
}
