// luxecart/src/catalog/sort.rs

use super::product::ProductRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::convert::Infallible;
use std::str::FromStr;

/// Listing order offered by the product and category pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
  /// Highest id first.
  #[default]
  Newest,
  PriceLow,
  PriceHigh,
  /// Most-rated first, ties broken newest first.
  Popular,
}

impl SortOrder {
  pub fn apply(self, products: &mut [ProductRecord]) {
    match self {
      SortOrder::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
      SortOrder::PriceLow => products.sort_by_key(|p| p.price),
      SortOrder::PriceHigh => products.sort_by_key(|p| Reverse(p.price)),
      SortOrder::Popular => products.sort_by(|a, b| {
        b.popularity()
          .cmp(&a.popularity())
          .then_with(|| b.id.cmp(&a.id))
      }),
    }
  }
}

// Unknown values fall back to newest-first, as the listing pages did.
impl FromStr for SortOrder {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(match s {
      "price-low" => SortOrder::PriceLow,
      "price-high" => SortOrder::PriceHigh,
      "popular" => SortOrder::Popular,
      _ => SortOrder::Newest,
    })
  }
}
