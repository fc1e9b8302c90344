use contracts::shared::bootstrap::INITIAL_DATA_ELEMENT_ID;
use serde::de::DeserializeOwned;

/// Начальные данные, встроенные серверным загрузчиком в страницу.
///
/// `None`, если элемента нет (страница отдана статикой) или JSON не
/// разбирается.
pub fn read_initial_data<T: DeserializeOwned>() -> Option<T> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(INITIAL_DATA_ELEMENT_ID)?;
    let text = element.text_content()?;

    match serde_json::from_str(&text) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("Invalid initial page data: {}", e);
            None
        }
    }
}
