//! HTML-оболочка клиентского приложения с данными серверного загрузчика.

use std::path::{Path, PathBuf};

use contracts::shared::bootstrap::{to_embedded_json, INITIAL_DATA_ELEMENT_ID};
use lol_html::html_content::ContentType;
use lol_html::{element, HtmlRewriter, Settings};
use serde::Serialize;

/// Оболочка на случай, когда сборки frontend нет рядом с сервером
const FALLBACK_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Product List</title>
</head>
<body>
    <noscript>This page requires JavaScript.</noscript>
</body>
</html>
"#;

#[derive(Debug, Clone)]
pub struct PageShell {
    dist_dir: PathBuf,
}

impl PageShell {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
        }
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// `index.html` из сборки frontend, либо встроенная оболочка
    pub async fn template(&self) -> String {
        let index_path = self.dist_dir.join("index.html");
        match tokio::fs::read_to_string(&index_path).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    "Cannot read shell template {}: {}; using fallback shell",
                    index_path.display(),
                    e
                );
                FALLBACK_SHELL.to_string()
            }
        }
    }

    /// Оболочка с начальными данными; при `None` оболочка как есть
    pub async fn render<T: Serialize>(&self, initial: Option<&T>) -> anyhow::Result<String> {
        let template = self.template().await;
        match initial {
            Some(data) => inject_initial_data(&template, &to_embedded_json(data)?),
            None => Ok(template),
        }
    }
}

/// Вставляет `<script type="application/json">` в начало `<body>`
pub fn inject_initial_data(template: &str, json: &str) -> anyhow::Result<String> {
    let script = format!(
        r#"<script id="{}" type="application/json">{}</script>"#,
        INITIAL_DATA_ELEMENT_ID, json
    );

    let mut output = Vec::with_capacity(template.len() + script.len());
    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![element!("body", |el| {
                el.prepend(&script, ContentType::Html);
                Ok(())
            })],
            ..Settings::default()
        },
        |c: &[u8]| output.extend_from_slice(c),
    );

    rewriter
        .write(template.as_bytes())
        .map_err(|e| anyhow::anyhow!("shell rewrite failed: {e}"))?;
    rewriter
        .end()
        .map_err(|e| anyhow::anyhow!("shell rewrite failed: {e}"))?;

    Ok(String::from_utf8(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_goes_first_in_body() {
        let html = inject_initial_data(
            "<html><head></head><body><div id=\"app\"></div></body></html>",
            r#"{"currentPage":2}"#,
        )
        .unwrap();
        assert_eq!(
            html,
            "<html><head></head><body><script id=\"initial-page-data\" type=\"application/json\">{\"currentPage\":2}</script><div id=\"app\"></div></body></html>"
        );
    }

    #[test]
    fn test_fallback_shell_accepts_data() {
        let html = inject_initial_data(FALLBACK_SHELL, "{}").unwrap();
        assert!(html.contains(r#"<script id="initial-page-data" type="application/json">{}</script>"#));
        assert!(html.contains("<noscript>"));
    }

    #[tokio::test]
    async fn test_missing_dist_uses_fallback() {
        let shell = PageShell::new("target/no-such-dist");
        let html = shell.render::<serde_json::Value>(None).await.unwrap();
        assert_eq!(html, FALLBACK_SHELL);
    }
}
