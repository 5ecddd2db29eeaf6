//! Catalog domain module: articles and the quantity/price lines that reference them.
//!
//! Pure data with derived values; no IO, no storage.

pub mod article;
pub mod product;

pub use article::Article;
pub use product::Product;
