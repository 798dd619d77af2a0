// luxecart/src/catalog/mod.rs

//! Product catalog model: records, the provider seam, listing order,
//! categories and promotional deals.

pub mod categories;
pub mod deals;
pub mod product;
pub mod provider;
pub mod sort;

pub use categories::{Category, CategoryPage};
pub use deals::{Deal, DealBoard, DealPage, DealProduct};
pub use product::{ProductRecord, Rating};
pub use provider::{ProductProvider, StaticCatalog};
pub use sort::SortOrder;
