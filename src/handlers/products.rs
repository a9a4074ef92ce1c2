use std::time::Instant;

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use tracing::{debug, info};

use crate::{error::AppResult, models::NewProduct, AppState};

// ── List ──────────────────────────────────────────────────────────────────────

/// Only product names are exposed; ordering follows the store.
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let products = state.store.list_products().await?;
    let elapsed = start.elapsed();

    info!(
        count = products.len(),
        elapsed_ms = elapsed.as_millis(),
        "Listed products"
    );

    let names: Vec<String> = products.into_iter().map(|p| p.name).collect();

    Ok((StatusCode::OK, Json(serde_json::json!({ "data": names }))))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Json(payload) = payload?;
    debug!(?payload, "Received product");

    let start = Instant::now();
    state.store.insert_product(&payload).await?;
    let elapsed = start.elapsed();

    info!(
        productid = payload.productid,
        name = %payload.name,
        elapsed_ms = elapsed.as_millis(),
        "Created product"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Successfully added {}", payload.name),
            "error": "nil",
        })),
    ))
}
