//! Передача данных серверного загрузчика в клиентское приложение.
//!
//! Backend кладёт первую страницу в `<script type="application/json">` с
//! этим id, frontend читает её как начальное состояние таблицы.

pub const INITIAL_DATA_ELEMENT_ID: &str = "initial-page-data";

/// Сериализует значение так, чтобы его можно было вставить внутрь `<script>`.
///
/// `<`, `>` и `&` экранируются как `\u003c` и т.п.; они встречаются только
/// внутри JSON-строк, поэтому результат остаётся валидным JSON.
pub fn to_embedded_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let value = serde_json::json!({ "name": "</script><b>&" });
        let embedded = to_embedded_json(&value).unwrap();
        assert!(!embedded.contains("</script>"));
        assert!(!embedded.contains('<'));

        let back: serde_json::Value = serde_json::from_str(&embedded).unwrap();
        assert_eq!(back, value);
    }
}
