use std::sync::Arc;

use crate::domain::a001_product::ProductProvider;
use crate::shared::page_shell::PageShell;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductProvider>,
    pub shell: Arc<PageShell>,
    /// Размер страницы, которым серверный загрузчик запрашивает список
    pub page_size: u32,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductProvider>, shell: PageShell, page_size: u32) -> Self {
        Self {
            products,
            shell: Arc::new(shell),
            page_size,
        }
    }
}
