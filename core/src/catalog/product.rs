// luxecart/src/catalog/product.rs

use crate::cart::{money, CartItemInput, ItemId, Money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
  pub rate: f64,
  pub count: u32,
}

/// A product as listed by a catalog source. Field names follow the
/// FakeStore feed (`title`, decimal `price`); `name` is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
  pub id: ItemId,
  #[serde(alias = "name")]
  pub title: String,
  #[serde(with = "money::decimal")]
  pub price: Money,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rating: Option<Rating>,
  #[serde(default, rename = "isNew")]
  pub is_new: bool,
}

impl ProductRecord {
  pub fn new(id: impl Into<ItemId>, title: impl Into<String>, price: Money) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      price,
      category: None,
      image: None,
      description: None,
      rating: None,
      is_new: false,
    }
  }

  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn with_image(mut self, image: impl Into<String>) -> Self {
    self.image = Some(image.into());
    self
  }

  pub fn with_rating(mut self, rate: f64, count: u32) -> Self {
    self.rating = Some(Rating { rate, count });
    self
  }

  pub fn marked_new(mut self, is_new: bool) -> Self {
    self.is_new = is_new;
    self
  }

  /// Cart input for `quantity` units of this product, priced as listed now.
  pub fn to_cart_input(&self, quantity: i64) -> CartItemInput {
    CartItemInput {
      id: Some(self.id.clone()),
      name: self.title.clone(),
      category: self.category.clone(),
      price: self.price,
      quantity: Some(quantity),
      image: self.image.clone(),
    }
  }

  pub(crate) fn popularity(&self) -> u32 {
    self.rating.map_or(0, |r| r.count)
  }
}

impl From<&ProductRecord> for CartItemInput {
  fn from(product: &ProductRecord) -> Self {
    product.to_cart_input(1)
  }
}
