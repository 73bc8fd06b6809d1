//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

use super::docs::ApiDoc;
use super::error::ErrorResponse;
use crate::catalog::{Item, ItemDraft, ItemStore};
use crate::error::{ItemError, ValidationError};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// The item store.
    pub store: Arc<ItemStore>,
    /// Prometheus handle, when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state around a store, without metrics.
    pub fn new(store: ItemStore) -> Self {
        Self {
            store: Arc::new(store),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ItemStore::new())
    }
}

/// Query parameters for name search.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring to look for in item names.
    pub name: Option<String>,
}

/// Root liveness message.
pub const ROOT_MESSAGE: &str = "Item Management API is running!";

/// Root handler - always returns 200.
#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, body = String)))]
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// Health check handler - always returns 200.
#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = String)))]
pub async fn health() -> &'static str {
    "OK"
}

/// List all items.
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "items",
    responses((status = 200, description = "All items in insertion order", body = Vec<Item>))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

/// Fetch one item by id.
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 200, body = Item),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Item>, ItemError> {
    let Path(id) = id?;
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or(ItemError::NotFound { id })
}

/// Create an item; any id in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "items",
    request_body = ItemDraft,
    responses(
        (status = 201, description = "Created item with its assigned id", body = Item),
        (status = 400, body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ItemError> {
    let Json(draft) = payload?;
    let item = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an existing item's fields, keeping its id.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item id")),
    request_body = ItemDraft,
    responses(
        (status = 200, body = Item),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ItemDraft>, JsonRejection>,
) -> Result<Json<Item>, ItemError> {
    let Path(id) = id?;
    let Json(draft) = payload?;
    state
        .store
        .update(id, draft)
        .await?
        .map(Json)
        .ok_or(ItemError::NotFound { id })
}

/// Delete an item.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ItemError> {
    let Path(id) = id?;
    if state.store.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ItemError::NotFound { id })
    }
}

/// Items in a category, case-insensitive.
#[utoipa::path(
    get,
    path = "/api/items/category/{category}",
    tag = "items",
    params(("category" = String, Path, description = "Category, matched ignoring case")),
    responses((status = 200, body = Vec<Item>))
)]
pub async fn items_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Item>> {
    Json(state.store.filter_by_category(&category).await)
}

/// Items whose name contains the `name` query parameter.
#[utoipa::path(
    get,
    path = "/api/items/search",
    tag = "items",
    params(SearchParams),
    responses(
        (status = 200, body = Vec<Item>),
        (status = 400, description = "Missing `name` parameter", body = ErrorResponse)
    )
)]
pub async fn search_items(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Item>>, ItemError> {
    let Query(params) = params?;
    let name = params
        .name
        .ok_or(ValidationError::MissingParameter("name"))?;
    Ok(Json(state.store.filter_by_name(&name).await))
}

/// Prometheus exposition; 404 when metrics are disabled.
pub async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// OpenAPI document for the service.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
