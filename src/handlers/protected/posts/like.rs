use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::app::AppState;
use crate::database::models::Like;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// PUT /posts/like/:id
pub async fn like(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError> {
    Ok(Json(state.posts.like(user.id, &id).await?))
}

/// PUT /posts/unlike/:id
pub async fn unlike(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError> {
    Ok(Json(state.posts.unlike(user.id, &id).await?))
}
