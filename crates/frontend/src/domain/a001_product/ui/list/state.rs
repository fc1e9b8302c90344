use contracts::domain::a001_product::aggregate::DEFAULT_PAGE_SIZE;
use contracts::domain::a001_product::ProductRecord;
use contracts::shared::pagination::PaginatedResult;

use crate::shared::list_utils::filter_list;

/// Номер запроса страницы; применяется только ответ на последний
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Чем закончилась загрузка страницы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Страница заменена целиком
    Applied { current_page: u32 },
    /// Ошибка; состояние не изменилось
    Failed(String),
    /// Пришёл ответ на устаревший запрос
    Stale,
}

impl FetchOutcome {
    /// Запись в лог для исхода загрузки `page`: не больше одной на ответ
    pub fn log_entry(&self, page: u32) -> Option<(log::Level, String)> {
        match self {
            FetchOutcome::Applied { .. } => None,
            FetchOutcome::Failed(e) => {
                Some((log::Level::Error, format!("Error fetching products: {}", e)))
            }
            FetchOutcome::Stale => Some((
                log::Level::Debug,
                format!("Dropped stale product page response (page {})", page),
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProductTableState {
    pub paginated_data: PaginatedResult<ProductRecord>,
    last_request: u64,
}

impl ProductTableState {
    pub fn new(initial: PaginatedResult<ProductRecord>) -> Self {
        Self {
            paginated_data: initial,
            last_request: 0,
        }
    }

    /// Заглушка до первой загрузки (пустые записи, все счётчики = 1)
    pub fn placeholder() -> Self {
        Self::new(PaginatedResult::placeholder(DEFAULT_PAGE_SIZE))
    }

    /// Записи текущей страницы, подходящие под запрос.
    ///
    /// Поиск идёт только по загруженной странице, не по всему набору.
    pub fn visible_records(&self, search: &str) -> Vec<ProductRecord> {
        filter_list(&self.paginated_data.records, search)
    }

    pub fn prev_target(&self) -> u32 {
        self.paginated_data.prev_page
    }

    pub fn next_target(&self) -> u32 {
        self.paginated_data.next_page
    }

    /// Страница (с единицы) для индекса кнопки (с нуля)
    pub fn index_target(index: usize) -> u32 {
        u32::try_from(index).unwrap_or(u32::MAX - 1) + 1
    }

    pub fn page_size(&self) -> u32 {
        self.paginated_data.page_size
    }

    pub fn begin_request(&mut self) -> RequestId {
        self.last_request += 1;
        RequestId(self.last_request)
    }

    /// Применяет ответ источника данных.
    ///
    /// Успех заменяет `paginated_data` целиком. Ошибка и ответ на
    /// устаревший запрос оставляют состояние как есть.
    pub fn apply_response(
        &mut self,
        request: RequestId,
        result: Result<PaginatedResult<ProductRecord>, String>,
    ) -> FetchOutcome {
        if request.0 != self.last_request {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(data) => {
                let current_page = data.current_page;
                self.paginated_data = data;
                FetchOutcome::Applied { current_page }
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name_en: &str, name_kh: &str, category: &str, sku: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name_en: name_en.to_string(),
            name_kh: name_kh.to_string(),
            category: category.to_string(),
            sku: sku.to_string(),
            image_url: format!("{}.png", id),
        }
    }

    fn rice_and_milk() -> Vec<ProductRecord> {
        vec![
            ProductRecord {
                image_url: "r.png".to_string(),
                ..product("1", "Rice", "អង្ករ", "Grain", "SKU1")
            },
            product("2", "Milk", "ទឹកដោះគោ", "Dairy", "SKU2"),
        ]
    }

    fn full_page(current_page: u32) -> PaginatedResult<ProductRecord> {
        let records = (0..10)
            .map(|i| {
                let id = ((current_page - 1) * 10 + i + 1).to_string();
                product(&id, &format!("Item {}", id), "", "Misc", &format!("SKU{}", id))
            })
            .collect();
        PaginatedResult::from_page(records, current_page, 10, 30)
    }

    #[test]
    fn test_scenario_rice_and_milk() {
        let state = ProductTableState::new(PaginatedResult::from_page(rice_and_milk(), 1, 10, 2));

        let visible = state.visible_records("ric");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");

        assert!(state.visible_records("zzz").is_empty());
        assert_eq!(state.visible_records("").len(), 2);
    }

    #[test]
    fn test_search_fields_and_case() {
        let state = ProductTableState::new(PaginatedResult::from_page(rice_and_milk(), 1, 10, 2));

        assert_eq!(state.visible_records("MILK")[0].id, "2");
        assert_eq!(state.visible_records("ទឹកដោះ")[0].id, "2");
        assert_eq!(state.visible_records("grain")[0].id, "1");
        assert_eq!(state.visible_records("sku2")[0].id, "2");
        assert_eq!(state.visible_records("sku").len(), 2);
        // imageUrl и id в поиске не участвуют
        assert!(state.visible_records("r.png").is_empty());
    }

    #[test]
    fn test_visible_is_subset_of_page() {
        let state = ProductTableState::new(full_page(2));
        for term in ["", "item", "1", "item 2", "misc", "nothing"] {
            let visible = state.visible_records(term);
            assert!(visible.len() <= state.paginated_data.records.len());
            for record in &visible {
                assert!(state.paginated_data.records.contains(record));
            }
        }
        assert_eq!(state.visible_records("").len(), 10);
    }

    #[test]
    fn test_placeholder_state() {
        let state = ProductTableState::placeholder();
        assert!(state.paginated_data.records.is_empty());
        assert_eq!(state.paginated_data.current_page, 1);
        assert_eq!(state.paginated_data.total_pages, 1);
        assert_eq!(state.paginated_data.total_items, 1);
        assert_eq!(state.page_size(), 10);
    }

    #[test]
    fn test_navigation_targets() {
        let state = ProductTableState::new(full_page(2));
        assert_eq!(state.prev_target(), 1);
        assert_eq!(state.next_target(), 3);
        assert_eq!(ProductTableState::index_target(0), 1);
        assert_eq!(ProductTableState::index_target(4), 5);
    }

    #[test]
    fn test_next_replaces_whole_page() {
        let mut state = ProductTableState::new(full_page(1));
        let target = state.next_target();
        assert_eq!(target, 2);

        // Пока ответа нет, ничего не меняется (в том числе currentPage)
        let request = state.begin_request();
        assert_eq!(state.paginated_data, full_page(1));

        let outcome = state.apply_response(request, Ok(full_page(target)));
        assert_eq!(outcome, FetchOutcome::Applied { current_page: 2 });
        assert_eq!(state.paginated_data, full_page(2));
        assert_eq!(state.paginated_data.records[0].id, "11");
    }

    #[test]
    fn test_failure_leaves_state_unchanged() {
        let mut state = ProductTableState::new(full_page(1));
        let before = state.paginated_data.clone();

        let request = state.begin_request();
        let outcome = state.apply_response(request, Err("HTTP 500".to_string()));

        assert_eq!(outcome, FetchOutcome::Failed("HTTP 500".to_string()));
        assert_eq!(state.paginated_data, before);
    }

    #[test]
    fn test_failure_is_logged_once_as_error() {
        let mut state = ProductTableState::new(full_page(1));
        let request = state.begin_request();
        let outcome = state.apply_response(request, Err("HTTP 503".to_string()));

        let entries: Vec<_> = outcome.log_entry(2).into_iter().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, log::Level::Error);
        assert!(entries[0].1.contains("HTTP 503"));
    }

    #[test]
    fn test_success_and_stale_are_not_errors() {
        let applied = FetchOutcome::Applied { current_page: 2 };
        assert_eq!(applied.log_entry(2), None);

        let (level, _) = FetchOutcome::Stale.log_entry(2).unwrap();
        assert_eq!(level, log::Level::Debug);
    }

    #[test]
    fn test_failure_keeps_placeholder() {
        let mut state = ProductTableState::placeholder();
        let request = state.begin_request();
        let outcome = state.apply_response(request, Err("network".to_string()));
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(state.paginated_data, PaginatedResult::placeholder(10));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = ProductTableState::new(full_page(1));
        let first = state.begin_request();
        let second = state.begin_request();

        assert_eq!(
            state.apply_response(second, Ok(full_page(3))),
            FetchOutcome::Applied { current_page: 3 }
        );
        assert_eq!(state.apply_response(first, Ok(full_page(2))), FetchOutcome::Stale);
        assert_eq!(state.paginated_data.current_page, 3);
    }
}
