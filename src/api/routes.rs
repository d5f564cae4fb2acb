//! Router construction.

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_todo, delete_todo, get_todo, health_check, list_todos, update_todo,
};

/// Builds the application router with tracing and CORS middleware.
///
/// `/todos/{id}` only serves identifiers made of ASCII digits; any other
/// segment gets the same empty 404 as an unknown path.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Tests
// =============================================================================
