pub mod aggregate;

pub use aggregate::{ProductListQuery, ProductListResponse, ProductRecord};
