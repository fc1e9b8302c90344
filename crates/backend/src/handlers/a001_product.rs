use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_product::{ProductListQuery, ProductListResponse};
use serde_json::{json, Value};

use crate::domain::a001_product::ProviderError;
use crate::shared::state::AppState;

/// GET /api/product?currentPage=&pageSize=
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ProductListQuery>, QueryRejection>,
) -> Result<Json<ProductListResponse>, (StatusCode, Json<Value>)> {
    let Query(query) = query.map_err(|e| {
        tracing::warn!("Bad product list query: {}", e);
        (StatusCode::BAD_REQUEST, Json(json!({ "error": e.body_text() })))
    })?;

    match state.products.get_product_list(query).await {
        Ok(data) => Ok(Json(ProductListResponse { data })),
        Err(e @ ProviderError::InvalidPageSize(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}
