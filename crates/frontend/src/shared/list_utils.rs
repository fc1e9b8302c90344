//! Утилиты для работы со списками (поиск по записям текущей страницы)

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (без учёта регистра)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Регистронезависимое вхождение подстроки
pub fn contains_ci(text: &str, filter_lower: &str) -> bool {
    text.to_lowercase().contains(filter_lower)
}

/// Фильтрует список по поисковому запросу; при пустом запросе весь список
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}
