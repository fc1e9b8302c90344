//! Постраничная выдача: одна страница записей плюс метаданные навигации.

use serde::{Deserialize, Serialize};

/// Одна страница результатов
///
/// Инварианты (для значений, собранных через [`PaginatedResult::from_page`]):
/// - `records.len() <= page_size`
/// - `current_page` в диапазоне `[1, total_pages]`
/// - `next_page` / `prev_page`: соседние страницы, прижатые к границам
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub current_page: u32,
    pub next_page: u32,
    pub prev_page: u32,
    pub page_size: u32,
    pub records: Vec<T>,
    pub total_pages: u32,
    pub total_items: u64,
}

/// Метаданные страницы без самих записей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: u32,
    pub next_page: u32,
    pub prev_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

impl PageMeta {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl<T> PaginatedResult<T> {
    /// Заглушка до первой загрузки: пустые записи, все счётчики = 1
    pub fn placeholder(page_size: u32) -> Self {
        Self {
            current_page: 1,
            next_page: 1,
            prev_page: 1,
            page_size,
            records: Vec::new(),
            total_pages: 1,
            total_items: 1,
        }
    }

    /// Собирает страницу и считает навигацию.
    ///
    /// `current_page` прижимается к `[1, total_pages]`; пустой набор даёт
    /// одну пустую страницу.
    pub fn from_page(records: Vec<T>, current_page: u32, page_size: u32, total_items: u64) -> Self {
        let total_pages = page_count(total_items, page_size);
        let current_page = current_page.clamp(1, total_pages);

        Self {
            current_page,
            next_page: current_page.saturating_add(1).min(total_pages),
            prev_page: current_page.saturating_sub(1).max(1),
            page_size,
            records,
            total_pages,
            total_items,
        }
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            current_page: self.current_page,
            next_page: self.next_page,
            prev_page: self.prev_page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.meta().has_prev()
    }

    pub fn has_next(&self) -> bool {
        self.meta().has_next()
    }
}

/// Количество страниц, минимум одна
pub fn page_count(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_items.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Разбор параметра `?page=`.
///
/// Отсутствующее, пустое, нечисловое или неположительное значение даёт 1.
pub fn parse_page_param(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}
