pub mod repository;
pub mod service;

pub use repository::ProductCatalog;
pub use service::{ProductProvider, ProviderError};
