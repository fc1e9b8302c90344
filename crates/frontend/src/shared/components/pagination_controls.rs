use crate::shared::icons::icon;
use contracts::shared::pagination::PageMeta;
use leptos::prelude::*;

/// Сколько номеров страниц показывать одновременно
const PAGE_WINDOW: usize = 7;

/// Zero-based page indexes to render around the current page.
///
/// Окно шириной `width` сдвигается так, чтобы не выходить за границы.
pub fn page_window(current_index: usize, total_pages: usize, width: usize) -> Vec<usize> {
    if total_pages == 0 || width == 0 {
        return Vec::new();
    }
    let width = width.min(total_pages);
    let current_index = current_index.min(total_pages - 1);
    let start = current_index
        .saturating_sub(width / 2)
        .min(total_pages - width);
    (start..start + width).collect()
}

/// PaginationControls component - prev / номера страниц / next.
///
/// Состояния не держит: каждое нажатие вызывает ровно один callback,
/// `on_page_click` получает индекс страницы с нуля.
#[component]
pub fn PaginationControls(
    /// Метаданные текущей страницы
    #[prop(into)]
    meta: Signal<PageMeta>,

    on_prev_click: Callback<()>,

    on_next_click: Callback<()>,

    /// Callback with zero-based page index
    on_page_click: Callback<usize>,
) -> impl IntoView {
    let pages = move || {
        let m = meta.get();
        let current_index = m.current_page.saturating_sub(1) as usize;
        page_window(current_index, m.total_pages as usize, PAGE_WINDOW)
    };

    view! {
        <nav class="pagination-controls" aria-label="pagination">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev_click.run(())
                disabled=move || !meta.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current_index = meta.get().current_page.saturating_sub(1) as usize;
                pages()
                    .into_iter()
                    .map(|index| {
                        let is_current = index == current_index;
                        view! {
                            <button
                                class=if is_current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                aria-current=if is_current { Some("page") } else { None }
                                disabled=is_current
                                on:click=move |_| on_page_click.run(index)
                            >
                                {(index + 1).to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_next_click.run(())
                disabled=move || !meta.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || {
                    let m = meta.get();
                    format!("Page {} of {} ({} items)", m.current_page, m.total_pages.max(1), m.total_items)
                }}
            </span>
        </nav>
    }
}
