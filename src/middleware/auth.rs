use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::app::AppState;
use crate::auth::Identity;
use crate::error::ApiError;

/// Authenticated caller, injected into request extensions for protected handlers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
}

impl From<Identity> for AuthUser {
    fn from(identity: Identity) -> Self {
        Self { id: identity.user_id }
    }
}

/// Token authentication middleware that resolves the caller and rejects anonymous requests
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_headers(&headers)
        .ok_or_else(|| ApiError::unauthorized("No token, authorization denied"))?;

    let identity = state.identity.resolve(&token).map_err(|e| {
        tracing::debug!("Token rejected: {}", e);
        ApiError::unauthorized("Token is not valid")
    })?;

    request.extensions_mut().insert(AuthUser::from(identity));

    Ok(next.run(request).await)
}

/// Token from `x-auth-token`, falling back to `Authorization: Bearer <token>`
fn extract_token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers.get("x-auth-token").and_then(|v| v.to_str().ok()) {
        let token = token.trim();
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
