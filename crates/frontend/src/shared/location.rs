//! Чтение и обновление `?page=` в адресной строке.

use contracts::shared::pagination::parse_page_param;
use std::collections::BTreeMap;
use web_sys::window;

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn parse_search(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Номер страницы из query string (1, если параметра нет или он кривой)
pub fn page_from_search(search: &str) -> u32 {
    parse_page_param(parse_search(search).get("page").map(String::as_str))
}

/// Query string с новым значением `page`; остальные параметры сохраняются
pub fn search_with_page(search: &str, page: u32) -> String {
    let mut params = parse_search(search);
    params.insert("page".to_string(), page.to_string());
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

pub fn current_page_param() -> u32 {
    page_from_search(&current_search())
}

/// Обновляет `?page=` без перезагрузки и без новой записи в истории
pub fn set_page_param(page: u32) {
    let current = current_search();
    let new_url = search_with_page(&current, page);

    // Only update URL if it actually changed
    if current == new_url {
        return;
    }
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}
