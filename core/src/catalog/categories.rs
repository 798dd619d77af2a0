// luxecart/src/catalog/categories.rs

use super::product::ProductRecord;
use super::sort::SortOrder;
use crate::cart::Money;
use crate::error::{CatalogError, CatalogResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
  pub name: &'static str,
  pub slug: &'static str,
  /// Advertised product count shown on the category grid.
  pub product_count: u32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<&'static str>,
}

const fn category(name: &'static str, slug: &'static str, product_count: u32) -> Category {
  Category {
    name,
    slug,
    product_count,
    description: None,
  }
}

pub const CATEGORIES: [Category; 8] = [
  Category {
    description: Some("Powerful laptops for work and play"),
    ..category("Laptops", "laptops", 124)
  },
  category("Smartphones", "smartphones", 89),
  category("Smartwatches", "smartwatches", 45),
  category("Headphones", "headphones", 67),
  category("Cameras", "cameras", 34),
  category("Gaming", "gaming", 78),
  category("TVs", "tvs", 56),
  category("Speakers", "speakers", 43),
];

pub fn all() -> &'static [Category] {
  &CATEGORIES
}

pub fn find(slug: &str) -> CatalogResult<&'static Category> {
  CATEGORIES
    .iter()
    .find(|c| c.slug == slug)
    .ok_or_else(|| CatalogError::not_found(format!("category '{}'", slug)))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPage {
  pub category: Category,
  pub products: Vec<ProductRecord>,
}

/// The listing for one category. Only laptops carry a stocked listing;
/// the other categories exist but list nothing yet.
pub fn page(slug: &str, order: SortOrder) -> CatalogResult<CategoryPage> {
  let category = *find(slug)?;
  let mut products = match category.slug {
    "laptops" => laptop_listing(),
    _ => Vec::new(),
  };
  order.apply(&mut products);
  Ok(CategoryPage { category, products })
}

/// Eight laptops from $999.99 in $100 steps; the first three are flagged new.
pub(crate) fn laptop_listing() -> Vec<ProductRecord> {
  (0..8i64)
    .map(|i| {
      ProductRecord::new(i + 1, format!("Premium Laptop {}", i + 1), Money::from_cents(99_999 + i * 10_000))
        .with_category("Laptops")
        .with_image(format!("https://source.unsplash.com/random/400x400?laptop={}", i + 1))
        .marked_new(i < 3)
    })
    .collect()
}
