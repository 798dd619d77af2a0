// luxecart/src/cart/item.rs

use super::money::Money;
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Product identifier. Catalog feeds use integers, hand-built carts
/// sometimes use slugs, so both are accepted.
///
/// Text in canonical integer form (`"42"`, not `"042"`) always becomes
/// `Number`, whichever way the id arrives, so one product has one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ItemId {
  Number(i64),
  Text(String),
}

impl ItemId {
  /// A whitespace-only text id counts as missing.
  pub fn is_blank(&self) -> bool {
    match self {
      ItemId::Number(_) => false,
      ItemId::Text(s) => s.trim().is_empty(),
    }
  }
}

impl fmt::Display for ItemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ItemId::Number(n) => write!(f, "{}", n),
      ItemId::Text(s) => f.write_str(s),
    }
  }
}

fn canonical_number(s: &str) -> Option<i64> {
  s.parse::<i64>().ok().filter(|n| n.to_string() == s)
}

impl<'de> Deserialize<'de> for ItemId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
      Number(i64),
      Text(String),
    }

    Ok(match Wire::deserialize(deserializer)? {
      Wire::Number(n) => ItemId::Number(n),
      Wire::Text(s) => ItemId::from(s),
    })
  }
}

// Path segments arrive as strings.
impl FromStr for ItemId {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(ItemId::from(s))
  }
}

impl From<i64> for ItemId {
  fn from(n: i64) -> Self {
    ItemId::Number(n)
  }
}

impl From<&str> for ItemId {
  fn from(s: &str) -> Self {
    match canonical_number(s) {
      Some(n) => ItemId::Number(n),
      None => ItemId::Text(s.to_string()),
    }
  }
}

impl From<String> for ItemId {
  fn from(s: String) -> Self {
    match canonical_number(&s) {
      Some(n) => ItemId::Number(n),
      None => ItemId::Text(s),
    }
  }
}

/// One row of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
  pub id: ItemId,
  pub name: String,
  pub category: Option<String>,
  /// Unit price captured when the row was created.
  #[serde(rename = "price_cents")]
  pub price: Money,
  pub quantity: u32,
  pub image: Option<String>,
}

impl CartItem {
  pub fn line_total(&self) -> Money {
    // Rows are only written after this product has been overflow-checked.
    Money::from_cents(self.price.cents().saturating_mul(i64::from(self.quantity)))
  }
}

/// Candidate row passed to `CartStore::add_to_cart`. Nothing here is
/// trusted; the store validates before touching its rows.
///
/// Over the wire the price is `price_cents` (integer) or, as catalog
/// listings send it, a decimal `price`. `price_cents` wins when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "CartItemInputWire")]
pub struct CartItemInput {
  pub id: Option<ItemId>,
  pub name: String,
  pub category: Option<String>,
  pub price: Money,
  /// Defaults to 1 when absent.
  pub quantity: Option<i64>,
  pub image: Option<String>,
}

#[derive(Deserialize)]
struct CartItemInputWire {
  #[serde(default)]
  id: Option<ItemId>,
  #[serde(default, alias = "title")]
  name: String,
  #[serde(default)]
  category: Option<String>,
  #[serde(default)]
  price_cents: Option<Money>,
  #[serde(default)]
  price: Option<f64>,
  #[serde(default)]
  quantity: Option<i64>,
  #[serde(default)]
  image: Option<String>,
}

impl TryFrom<CartItemInputWire> for CartItemInput {
  type Error = String;

  fn try_from(wire: CartItemInputWire) -> Result<Self, Self::Error> {
    let price = match (wire.price_cents, wire.price) {
      (Some(cents), _) => cents,
      (None, Some(amount)) => Money::from_decimal(amount).ok_or_else(|| format!("price {} is not a valid amount", amount))?,
      (None, None) => return Err("missing field `price_cents`".to_string()),
    };
    Ok(CartItemInput {
      id: wire.id,
      name: wire.name,
      category: wire.category,
      price,
      quantity: wire.quantity,
      image: wire.image,
    })
  }
}

impl CartItemInput {
  pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: Money) -> Self {
    Self {
      id: Some(id.into()),
      name: name.into(),
      category: None,
      price,
      quantity: None,
      image: None,
    }
  }

  pub fn with_quantity(mut self, quantity: i64) -> Self {
    self.quantity = Some(quantity);
    self
  }

  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn with_image(mut self, image: impl Into<String>) -> Self {
    self.image = Some(image.into());
    self
  }
}
