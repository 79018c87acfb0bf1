use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::database::models::Post;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::validation::TextInput;

/// POST /posts - Create a post owned by the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Json(input) = payload?;
    let post = state.posts.create(user.id, input.text).await?;
    Ok(Json(post))
}

/// GET /posts - All posts, newest first
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.posts.list().await?))
}

/// GET /posts/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.posts.get(&id).await?))
}

/// DELETE /posts/:id - Only the owner may delete
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.posts.delete(user.id, &id).await?;
    Ok(Json(json!({ "msg": "Post removed" })))
}
