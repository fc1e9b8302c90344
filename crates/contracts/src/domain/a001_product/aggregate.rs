use serde::{Deserialize, Serialize};

use crate::shared::pagination::PaginatedResult;

// ============================================================================
// Product record
// ============================================================================

/// Товар в том виде, в каком его отдаёт `/api/product`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    /// Наименование (английский)
    pub name_en: String,
    /// Наименование (кхмерский)
    pub name_kh: String,
    pub category: String,
    pub sku: String,
    pub image_url: String,
}

impl ProductRecord {
    /// Путь карточки товара
    pub fn info_path(&self) -> String {
        format!("/productInfo/{}", self.id)
    }
}

// ============================================================================
// List request / response
// ============================================================================

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Запрос страницы списка товаров (`?currentPage=&pageSize=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    #[serde(default = "default_current_page")]
    pub current_page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_current_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            current_page: default_current_page(),
            page_size: default_page_size(),
        }
    }
}

impl ProductListQuery {
    pub fn new(current_page: u32, page_size: u32) -> Self {
        Self {
            current_page,
            page_size,
        }
    }

    /// Query string для `/api/product`
    pub fn to_query_string(&self) -> String {
        format!(
            "currentPage={}&pageSize={}",
            self.current_page, self.page_size
        )
    }
}

/// Тело ответа `/api/product`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub data: PaginatedResult<ProductRecord>,
}
