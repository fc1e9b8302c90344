pub mod state;

use crate::domain::a001_product::api::fetch_product_page;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Button, Input};
use crate::shared::debounce::use_debounce;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::location::set_page_param;
use contracts::domain::a001_product::ProductRecord;
use contracts::shared::pagination::PaginatedResult;
use leptos::prelude::*;
use state::{FetchOutcome, ProductTableState};

/// Задержка поиска после последнего нажатия клавиши
const SEARCH_DEBOUNCE_MS: u32 = 300;

impl Searchable for ProductRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter_lower = filter.to_lowercase();

        contains_ci(&self.name_en, &filter_lower)
            || contains_ci(&self.name_kh, &filter_lower)
            || contains_ci(&self.category, &filter_lower)
            || contains_ci(&self.sku, &filter_lower)
    }
}

/// Таблица товаров с поиском по текущей странице и постраничной навигацией.
///
/// `initial`: данные серверного загрузчика, единственный источник
/// начального состояния. Если их нет, таблица сама загружает
/// `requested_page`. Любая навигация запрашивает целевую страницу и
/// заменяет результат целиком.
#[component]
#[allow(non_snake_case)]
pub fn ProductTable(
    #[prop(into)] title: String,
    initial: Option<PaginatedResult<ProductRecord>>,
    /// Страница для самостоятельной загрузки, когда `initial` нет
    #[prop(optional)]
    requested_page: Option<u32>,
) -> impl IntoView {
    let needs_load = initial.is_none();
    let state = RwSignal::new(match initial {
        Some(data) => ProductTableState::new(data),
        None => ProductTableState::placeholder(),
    });

    let search_query = RwSignal::new(String::new());
    let search_signal: Signal<String> = search_query.into();
    let search_debounced = use_debounce(search_signal, SEARCH_DEBOUNCE_MS);

    let visible = Memo::new(move |_| {
        let search = search_debounced.get();
        state.with(|s| s.visible_records(&search))
    });
    let meta = Signal::derive(move || state.with(|s| s.paginated_data.meta()));

    let load_page = move |page: u32| {
        let Some((request, page_size)) =
            state.try_update_untracked(|s| (s.begin_request(), s.page_size()))
        else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_product_page(page, page_size).await;
            // None: таблица уже размонтирована
            let Some(outcome) = state.try_update(|s| s.apply_response(request, result)) else {
                return;
            };
            if let Some((level, message)) = outcome.log_entry(page) {
                log::log!(level, "{}", message);
            }
            if let FetchOutcome::Applied { current_page } = outcome {
                set_page_param(current_page);
            }
        });
    };

    let handle_prev_click = Callback::new(move |_: ()| {
        load_page(state.with_untracked(|s| s.prev_target()));
    });
    let handle_next_click = Callback::new(move |_: ()| {
        load_page(state.with_untracked(|s| s.next_target()));
    });
    let handle_page_click = Callback::new(move |index: usize| {
        load_page(ProductTableState::index_target(index));
    });

    if needs_load {
        load_page(requested_page.unwrap_or(1));
    }

    view! {
        <div class="product-table">
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>

            <div class="page__toolbar">
                <Input
                    class="max-w-sm"
                    placeholder="Search products..."
                    value=search_query
                    on_input=Callback::new(move |val: String| search_query.set(val))
                />
                <a href="/product/create">
                    <Button>
                        {icon("plus")}
                        "Add Product"
                    </Button>
                </a>
            </div>

            <div class="table-container">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"English Name"</th>
                            <th>"Khmer Name"</th>
                            <th>"Category"</th>
                            <th>"Sku"</th>
                            <th>"Image"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="table__empty">"No products found"</td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|product| view! { <ProductRow product=product /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                meta=meta
                on_prev_click=handle_prev_click
                on_next_click=handle_next_click
                on_page_click=handle_page_click
            />
        </div>
    }
}

/// Строка таблицы: каждая ячейка ведёт на карточку товара
#[component]
#[allow(non_snake_case)]
fn ProductRow(product: ProductRecord) -> impl IntoView {
    let href = product.info_path();
    let cell = move |text: String| {
        view! {
            <td>
                <a href=href.clone() class="block">{text}</a>
            </td>
        }
    };

    view! {
        <tr>
            {cell(product.id)}
            {cell(product.name_en)}
            {cell(product.name_kh)}
            {cell(product.category)}
            {cell(product.sku)}
            {cell(product.image_url)}
        </tr>
    }
}
