use axum::http::{header, Method};
use axum::response::Redirect;
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::request_logger::request_logger;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let dist = ServeDir::new(state.shell.dist_dir());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(|| async { Redirect::to("/product") }))
        // Страница списка товаров (серверный загрузчик)
        .route("/product", get(handlers::product_page::product_page))
        .route("/product/", get(handlers::product_page::product_page))
        // API
        .route("/api/product", get(handlers::a001_product::list))
        .fallback_service(dist)
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{ProductCatalog, ProductProvider, ProviderError};
    use crate::shared::page_shell::PageShell;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::domain::a001_product::{ProductListQuery, ProductListResponse, ProductRecord};
    use contracts::shared::pagination::PaginatedResult;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FailingProvider;

    #[async_trait]
    impl ProductProvider for FailingProvider {
        async fn get_product_list(
            &self,
            _query: ProductListQuery,
        ) -> Result<PaginatedResult<ProductRecord>, ProviderError> {
            Err(ProviderError::Unavailable("offline".to_string()))
        }
    }

    fn app_with(provider: Arc<dyn ProductProvider>) -> Router {
        let shell = PageShell::new("target/no-such-dist");
        configure_routes(AppState::new(provider, shell, 10))
    }

    fn app() -> Router {
        app_with(Arc::new(ProductCatalog::embedded().unwrap()))
    }

    async fn send_get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send_get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_root_redirects_to_listing() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/product");
    }

    #[tokio::test]
    async fn test_api_product_page() {
        let (status, body) = send_get(app(), "/api/product?currentPage=2&pageSize=10").await;
        assert_eq!(status, StatusCode::OK);

        let response: ProductListResponse = serde_json::from_str(&body).unwrap();
        let data = response.data;
        assert_eq!(data.current_page, 2);
        assert_eq!(data.prev_page, 1);
        assert_eq!(data.next_page, 3);
        assert_eq!(data.page_size, 10);
        assert_eq!(data.total_pages, 3);
        assert_eq!(data.total_items, 23);
        assert_eq!(data.records.len(), 10);
        assert_eq!(data.records[0].id, "11");
    }

    #[tokio::test]
    async fn test_api_product_defaults() {
        let (status, body) = send_get(app(), "/api/product").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["currentPage"], 1);
        assert_eq!(json["data"]["pageSize"], 10);
        assert_eq!(json["data"]["records"][0]["nameEn"], "Rice");
    }

    #[tokio::test]
    async fn test_api_product_bad_input() {
        let (status, body) = send_get(app(), "/api/product?currentPage=1&pageSize=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid page size"));

        let (status, body) = send_get(app(), "/api/product?currentPage=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("error"));
    }

    #[tokio::test]
    async fn test_api_product_provider_failure() {
        let (status, body) = send_get(app_with(Arc::new(FailingProvider)), "/api/product").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("offline"));
    }

    #[tokio::test]
    async fn test_loader_embeds_requested_page() {
        let (status, body) = send_get(app(), "/product?page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<script id="initial-page-data" type="application/json">"#));
        assert!(body.contains(r#""currentPage":2"#));
        assert!(body.contains(r#""id":"11""#));
    }

    #[tokio::test]
    async fn test_loader_defaults_unparsable_page() {
        for uri in [
            "/product",
            "/product?page=",
            "/product?page=abc",
            "/product?page=-1",
            "/product?page=1&page=2",
            "/product?page=99999999999",
        ] {
            let (status, body) = send_get(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(r#""currentPage":1"#), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_loader_accepts_trailing_slash() {
        let (status, body) = send_get(app(), "/product/?page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""currentPage":2"#));
    }

    #[tokio::test]
    async fn test_loader_without_data_still_renders_shell() {
        let (status, body) = send_get(app_with(Arc::new(FailingProvider)), "/product").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<noscript>"));
        assert!(!body.contains("initial-page-data"));
    }
}
