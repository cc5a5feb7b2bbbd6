//! JSON API routes for the product catalog.
//!
//! Endpoints:
//! - `GET    /api/products`      - list all products in insertion order
//! - `POST   /api/products`      - create a product
//! - `GET    /api/products/{id}` - fetch a single product
//! - `PUT    /api/products/{id}` - merge supplied fields into a product
//! - `PATCH  /api/products/{id}` - same merge semantics as PUT
//! - `DELETE /api/products/{id}` - remove a product
//! - `GET    /api/stats`         - derived price aggregates
//!
//! Validation errors respond with `400` and a `{"error": "..."}` body, unknown
//! products (including unparseable ids) with `404` and the same body shape.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use catalogd_core::{
    coerce_price, CatalogError, CatalogHandle, CatalogStats, Product, ProductId, ProductPatch,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

#[derive(Clone)]
pub struct ApiState {
    catalog: CatalogHandle,
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Body accepted by the create and update endpoints.
///
/// Every field is optional at the wire level; the handlers decide which fields
/// are required. `price` stays a raw JSON value so numbers and numeric strings
/// are both accepted.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(catalog: CatalogHandle) -> Router {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).patch(update_product).delete(delete_product),
        )
        .route("/api/stats", get(catalog_stats))
        .with_state(ApiState { catalog })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn list_products(State(state): State<ApiState>) -> Json<Vec<Product>> {
    Json(state.catalog.products())
}

async fn get_product(
    Path(id): Path<String>,
    State(state): State<ApiState>,
) -> Result<Json<Product>, (StatusCode, Json<ApiError>)> {
    let id = parse_product_id(&id)?;

    state.catalog.get(id).map(Json).ok_or_else(|| error_response(CatalogError::NotFound))
}

async fn create_product(
    State(state): State<ApiState>,
    body: Option<Json<ProductPayload>>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, Json<ApiError>)> {
    let payload = body.map(|Json(payload)| payload).unwrap_or_default();

    let name = payload.name.unwrap_or_default();
    if name.is_empty() {
        return Err(error_response(CatalogError::MissingRequiredFields));
    }

    let price = match payload.price {
        None | Some(Value::Null) => {
            return Err(error_response(CatalogError::MissingRequiredFields))
        }
        Some(raw) => coerce_price(&raw).ok_or_else(|| error_response(CatalogError::InvalidPrice))?,
    };
    if price.is_zero() {
        return Err(error_response(CatalogError::MissingRequiredFields));
    }

    let product = state.catalog.create(name, price);
    info!(
        event_name = "catalog.product.created",
        product_id = %product.id,
        name = %product.name,
        "product created"
    );

    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    Path(id): Path<String>,
    State(state): State<ApiState>,
    body: Option<Json<ProductPayload>>,
) -> Result<Json<Product>, (StatusCode, Json<ApiError>)> {
    let id = parse_product_id(&id)?;

    // Existence is checked before the payload so an unknown id reports 404
    // even when the supplied price would not validate.
    if state.catalog.get(id).is_none() {
        return Err(error_response(CatalogError::NotFound));
    }

    let payload = body.map(|Json(payload)| payload).unwrap_or_default();
    let price = match payload.price {
        None | Some(Value::Null) => None,
        Some(raw) => {
            Some(coerce_price(&raw).ok_or_else(|| error_response(CatalogError::InvalidPrice))?)
        }
    };
    let patch = ProductPatch { name: payload.name, price };

    let product = state.catalog.update(id, patch).map_err(error_response)?;
    info!(
        event_name = "catalog.product.updated",
        product_id = %product.id,
        name = %product.name,
        "product updated"
    );

    Ok(Json(product))
}

async fn delete_product(
    Path(id): Path<String>,
    State(state): State<ApiState>,
) -> Result<Json<DeleteResponse>, (StatusCode, Json<ApiError>)> {
    let id = parse_product_id(&id)?;

    let product = state.catalog.remove(id).map_err(error_response)?;
    info!(
        event_name = "catalog.product.deleted",
        product_id = %product.id,
        "product deleted"
    );

    Ok(Json(DeleteResponse { message: "Product deleted".to_string() }))
}

async fn catalog_stats(State(state): State<ApiState>) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_product_id(raw: &str) -> Result<ProductId, (StatusCode, Json<ApiError>)> {
    raw.parse().map_err(|_| error_response(CatalogError::NotFound))
}

fn error_response(error: CatalogError) -> (StatusCode, Json<ApiError>) {
    let status = if error.is_not_found() { StatusCode::NOT_FOUND } else { StatusCode::BAD_REQUEST };
    (status, Json(ApiError { error: error.to_string() }))
}
