//! OpenAPI document for the HTTP surface.

use utoipa::OpenApi;

use crate::domain::{ErrorCode, Item, User};
use crate::inbound::http::items;

/// Aggregated OpenAPI description of the `/api/barang` endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        items::list,
        items::create,
        items::update,
        items::update_status,
        items::remove,
    ),
    components(schemas(Item, User, ErrorCode)),
    tags((name = "barang", description = "Token-gated inventory item management"))
)]
pub struct ApiDoc;
