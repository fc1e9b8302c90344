pub mod a001_product;
pub mod product_page;
