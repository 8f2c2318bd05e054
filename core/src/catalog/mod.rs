// swapmart/src/catalog/mod.rs

//! The catalog: product records, the injectable store, the read-only
//! query engine, and the owner-scoped mutation gateway.

pub mod gateway;
pub mod product;
pub mod query;
pub mod store;

pub use gateway::Catalog;
pub use product::{Category, CategoryFilter, NewProduct, Product, UnknownCategory};
pub use query::{list, ProductFilter};
pub use store::{CatalogStore, InMemoryCatalog};
