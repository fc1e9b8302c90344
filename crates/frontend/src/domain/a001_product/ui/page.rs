use super::list::ProductTable;
use crate::shared::bootstrap::read_initial_data;
use crate::shared::location::current_page_param;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_product::ProductRecord;
use contracts::shared::pagination::PaginatedResult;
use leptos::prelude::*;

/// Страница `/product`.
///
/// Начальные данные берутся из встроенного загрузчиком JSON; если его нет,
/// таблица загрузит страницу из `?page=` сама.
#[component]
#[allow(non_snake_case)]
pub fn ProductPage() -> impl IntoView {
    let initial = read_initial_data::<PaginatedResult<ProductRecord>>();
    if initial.is_none() {
        log::debug!("No initial product data in page, loading on the client");
    }
    let requested_page = current_page_param();

    view! {
        <PageFrame page_id="a001_product--list">
            <ProductTable title="Product List" initial=initial requested_page=requested_page />
        </PageFrame>
    }
}
