//! HTTP API route definitions.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    create_item, delete_item, get_item, health, items_by_category, list_items, openapi,
    render_metrics, root, search_items, update_item, AppState,
};
use crate::metrics;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/items/health", get(health))
        // Item endpoints; static segments take priority over `:id`
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/search", get(search_items))
        .route("/api/items/category/:category", get(items_by_category))
        .route(
            "/api/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        // Operational endpoints
        .route("/metrics", get(render_metrics))
        .route("/api-docs/openapi.json", get(openapi))
        .route_layer(middleware::from_fn(track_latency))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Record per-route request latency.
async fn track_latency(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let method = request.method().to_string();

    let response = next.run(request).await;
    metrics::record_http_latency(start, &endpoint, &method, response.status().as_u16());
    response
}
