use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::MAX_PAGE_SIZE;
use contracts::domain::a001_product::{ProductListQuery, ProductRecord};
use contracts::shared::pagination::{page_count, PaginatedResult};
use thiserror::Error;

use super::repository::ProductCatalog;

/// Ошибки источника данных о товарах
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid page size: {0} (expected 1..={max})", max = MAX_PAGE_SIZE)]
    InvalidPageSize(u32),

    #[error("Product source unavailable: {0}")]
    Unavailable(String),
}

/// Источник страниц списка товаров.
///
/// Один и тот же контракт обслуживает и HTTP-эндпоинт, и серверный
/// загрузчик страницы (вызов в процессе).
#[async_trait]
pub trait ProductProvider: Send + Sync {
    async fn get_product_list(
        &self,
        query: ProductListQuery,
    ) -> Result<PaginatedResult<ProductRecord>, ProviderError>;
}

#[async_trait]
impl ProductProvider for ProductCatalog {
    async fn get_product_list(
        &self,
        query: ProductListQuery,
    ) -> Result<PaginatedResult<ProductRecord>, ProviderError> {
        paginate(self.all(), query)
    }
}

/// Вырезает запрошенную страницу из упорядоченного набора.
///
/// Номер страницы за пределами диапазона прижимается к ближайшей границе.
pub fn paginate(
    records: &[ProductRecord],
    query: ProductListQuery,
) -> Result<PaginatedResult<ProductRecord>, ProviderError> {
    if query.page_size == 0 || query.page_size > MAX_PAGE_SIZE {
        return Err(ProviderError::InvalidPageSize(query.page_size));
    }

    let total_items = records.len() as u64;
    let total_pages = page_count(total_items, query.page_size);
    let current_page = query.current_page.clamp(1, total_pages);

    let page_size = query.page_size as usize;
    let offset = (current_page as usize - 1) * page_size;
    let page: Vec<ProductRecord> = records.iter().skip(offset).take(page_size).cloned().collect();

    Ok(PaginatedResult::from_page(
        page,
        current_page,
        query.page_size,
        total_items,
    ))
}
