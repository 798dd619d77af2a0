// luxecart/src/catalog/provider.rs

//! The `ProductProvider` seam: the cart never knows where products come from.

use super::product::ProductRecord;
use super::sort::SortOrder;
use crate::cart::{ItemId, Money};
use crate::error::{CatalogError, CatalogResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{event, Level};

/// Read-only product feed.
#[async_trait]
pub trait ProductProvider: Send + Sync + 'static {
  /// Every product the source currently lists, in source order.
  async fn list_products(&self) -> CatalogResult<Vec<ProductRecord>>;

  async fn list_sorted(&self, order: SortOrder) -> CatalogResult<Vec<ProductRecord>> {
    let mut products = self.list_products().await?;
    order.apply(&mut products);
    Ok(products)
  }

  async fn find_product(&self, id: &ItemId) -> CatalogResult<ProductRecord> {
    self
      .list_products()
      .await?
      .into_iter()
      .find(|p| &p.id == id)
      .ok_or_else(|| CatalogError::not_found(format!("product {}", id)))
  }
}

/// Serves a fixed, in-memory product list.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
  products: Arc<Vec<ProductRecord>>,
}

impl StaticCatalog {
  pub fn new(products: Vec<ProductRecord>) -> Self {
    Self {
      products: Arc::new(products),
    }
  }

  /// The storefront's built-in demo listing: the laptop range from the
  /// category pages plus the two "Premium Product" rows the cart page seeds.
  pub fn demo() -> Self {
    let mut products = super::categories::laptop_listing();
    products.extend((1..=2i64).map(|i| {
      ProductRecord::new(100 + i, format!("Premium Product {}", i), Money::from_cents(19999))
        .with_category("Electronics")
        .with_image(format!("https://source.unsplash.com/random/80x80?product={}", i))
    }));
    event!(Level::DEBUG, count = products.len(), "Demo catalog built.");
    Self::new(products)
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }
}

#[async_trait]
impl ProductProvider for StaticCatalog {
  async fn list_products(&self) -> CatalogResult<Vec<ProductRecord>> {
    Ok(self.products.as_ref().clone())
  }
}
