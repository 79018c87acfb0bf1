use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::IdentityResolver;
use crate::config::SecurityConfig;
use crate::database::store::{PostStore, UserStore};
use crate::handlers::{protected::posts, public};
use crate::middleware::jwt_auth_middleware;
use crate::services::PostService;

/// Dependencies shared by every handler. Built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostStore>,
        users: Arc<dyn UserStore>,
        identity: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            posts: PostService::new(posts, users),
            identity,
        }
    }
}

pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Protected
        .merge(post_routes(state.clone()))
        .with_state(state)
        // Global middleware
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}

fn post_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::post_list).post(posts::post_create))
        .route("/posts/:id", get(posts::post_get).delete(posts::post_delete))
        .route("/posts/like/:id", put(posts::post_like))
        .route("/posts/unlike/:id", put(posts::post_unlike))
        .route("/posts/comment/:id", post(posts::comment_create))
        .route("/posts/comment/:id/:comment_id", delete(posts::comment_delete))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

/// CORS policy from config. A `*` origin allows everything; disabled CORS sends no headers.
pub fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }
    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
