//! PageFrame: корневая обёртка страницы.
//!
//! `id` в формате `{entity}--{category}` (например `"a001_product--list"`)
//! позволяет по DOM-инспектору сразу найти каталог `domain/{entity}/`.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {}", class)
    };

    view! {
        <div id=page_id class=full_class>
            {children()}
        </div>
    }
}
