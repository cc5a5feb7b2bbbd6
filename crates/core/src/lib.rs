pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;

pub use catalog::{Catalog, CatalogHandle, CatalogStats};
pub use domain::product::{coerce_price, Product, ProductId, ProductPatch};
pub use errors::CatalogError;
