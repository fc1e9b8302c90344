pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

use std::sync::Arc;

use domain::a001_product::ProductCatalog;
use shared::config::{load_config, resolve_path};
use shared::page_shell::PageShell;
use shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    shared::logging::init_tracing()?;

    let config = load_config()?;

    let seed_path = config.catalog.seed_path.as_deref().map(resolve_path);
    let catalog = ProductCatalog::load(seed_path.as_deref())?;
    if catalog.is_empty() {
        tracing::warn!("Product catalog is empty, /product will show a single empty page");
    } else {
        tracing::info!("Product catalog ready: {} items", catalog.len());
    }

    let shell = PageShell::new(resolve_path(&config.server.dist_dir));
    let state = AppState::new(Arc::new(catalog), shell, config.listing.page_size);
    let app = routes::configure_routes(state);

    let addr = config.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
