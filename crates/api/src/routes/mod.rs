//! Routing definitions for the item browser API.

use std::path::Path;

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the application router.
///
/// When `static_dir` is given, unknown non-API paths are served from it and
/// fall back to its `index.html` so client-side routes resolve.
///
/// ```ignore
/// let state = AppState::from_config(&config);
/// let router = create_router(state, config.static_dir.as_deref());
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/items", get(handlers::list_items))
        .route("/select", post(handlers::select_item))
        .route("/reorder", post(handlers::reorder_items));

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api);

    if let Some(directory) = static_dir {
        tracing::info!(directory = %directory.display(), "Serving static client bundle");

        let spa = ServeDir::new(directory)
            .not_found_service(ServeFile::new(directory.join("index.html")));
        router = router.fallback_service(spa);
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// Tests
// =============================================================================
