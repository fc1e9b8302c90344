pub mod bootstrap;
pub mod pagination;
