use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};

use crate::app::AppState;
use crate::database::models::Comment;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::validation::TextInput;

/// POST /posts/comment/:id - Add a comment; returns the post's comments
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(state.posts.comment(user.id, &id, input.text).await?))
}

/// DELETE /posts/comment/:id/:comment_id - Only the comment's author may delete it
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    Ok(Json(state.posts.uncomment(user.id, &id, &comment_id).await?))
}
