//! API route configuration

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

/// Build the complete API router with middleware.
///
/// `max_body_size` is in bytes; 0 disables the limit.
pub fn build_router(app_state: AppState, max_body_size: usize) -> Router {
    let explain_routes = Router::new()
        .route("/explain-math", post(handlers::explain_math))
        .route("/explain-math-image", post(handlers::explain_math_image));

    // Oversized bodies surface as a Json rejection so they render as an error report
    let body_limit = if max_body_size > 0 {
        DefaultBodyLimit::max(max_body_size)
    } else {
        DefaultBodyLimit::disable()
    };

    let api_routes = Router::new()
        .merge(explain_routes.clone())
        .nest("/api", explain_routes)
        .layer(body_limit);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .merge(api_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
