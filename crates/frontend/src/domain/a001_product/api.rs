use contracts::domain::a001_product::{ProductListQuery, ProductListResponse, ProductRecord};
use contracts::shared::pagination::PaginatedResult;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;

/// GET /api/product?currentPage=&pageSize=
///
/// Запрос идёт с `credentials: same-origin`; без таймаута и повторов.
pub async fn fetch_product_page(
    current_page: u32,
    page_size: u32,
) -> Result<PaginatedResult<ProductRecord>, String> {
    let query = ProductListQuery::new(current_page, page_size);
    let url = api_url(&format!("/api/product?{}", query.to_query_string()));

    let response = Request::get(&url)
        .credentials(RequestCredentials::SameOrigin)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body: ProductListResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.data)
}
