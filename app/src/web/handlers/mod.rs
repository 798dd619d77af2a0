// luxecart_server/src/web/handlers/mod.rs

// Declare handler modules
pub mod cart_handlers;
pub mod catalog_handlers;
pub mod chat_handlers;
pub mod product_handlers;

use luxecart::ItemId;
use serde::Deserialize;
use std::convert::Infallible;

#[derive(Deserialize, Debug, Default)]
pub struct SortQuery {
  pub sort: Option<String>,
}

impl SortQuery {
  pub fn order(&self) -> luxecart::SortOrder {
    self
      .sort
      .as_deref()
      .unwrap_or_default()
      .parse()
      .unwrap_or_else(|never: Infallible| match never {})
  }
}

/// Path segments become numeric ids when they parse as integers.
pub(crate) fn item_id_from_path(raw: String) -> ItemId {
  raw.parse().unwrap_or_else(|never: Infallible| match never {})
}
