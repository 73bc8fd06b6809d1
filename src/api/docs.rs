//! OpenAPI document for the item API.

use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::handlers;
use crate::catalog::{Item, ItemDraft};

/// Generated OpenAPI description of the public routes.
#[derive(OpenApi)]
#[openapi(
    info(title = "Item Management API", description = "In-memory item catalog"),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_items,
        handlers::get_item,
        handlers::create_item,
        handlers::update_item,
        handlers::delete_item,
        handlers::items_by_category,
        handlers::search_items,
    ),
    components(schemas(Item, ItemDraft, ErrorResponse)),
    tags(
        (name = "items", description = "Item catalog operations"),
        (name = "health", description = "Liveness checks")
    )
)]
pub struct ApiDoc;
