use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use contracts::domain::a001_product::ProductListQuery;
use contracts::shared::pagination::parse_page_param;
use serde::Deserialize;

use crate::shared::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProductPageParams {
    pub page: Option<String>,
}

/// GET /product?page=
///
/// Серверный загрузчик: запрашивает страницу у источника данных в процессе
/// и отдаёт оболочку приложения с этой страницей в качестве начальных
/// данных. Если источник недоступен, оболочка уходит без данных и клиент
/// загружает страницу сам.
pub async fn product_page(
    State(state): State<AppState>,
    params: Result<Query<ProductPageParams>, QueryRejection>,
) -> Response {
    // Кривой query string (например, повторный `page`) даёт первую страницу
    let raw_page = match params {
        Ok(Query(params)) => params.page,
        Err(e) => {
            tracing::warn!("Unparsable product page query: {}", e);
            None
        }
    };
    let page = parse_page_param(raw_page.as_deref());
    let query = ProductListQuery::new(page, state.page_size);

    let initial = match state.products.get_product_list(query).await {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::error!("Failed to load product page {}: {}", page, e);
            None
        }
    };

    match state.shell.render(initial.as_ref()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render product page shell: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
