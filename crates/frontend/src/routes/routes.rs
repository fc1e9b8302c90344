use crate::domain::a001_product::ui::page::ProductPage;
use leptos::prelude::*;

/// Страница, которую нужно показать для данного пути
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    ProductList,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/product" => AppRoute::ProductList,
            _ => AppRoute::NotFound,
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    match AppRoute::from_path(&current_path()) {
        AppRoute::ProductList => view! { <ProductPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="page">
                <h1 class="page__title">"Not Found"</h1>
                <a href="/product">"Back to products"</a>
            </div>
        }
        .into_any(),
    }
}
