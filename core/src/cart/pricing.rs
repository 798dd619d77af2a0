// luxecart/src/cart/pricing.rs

//! Shipping policy and the derived-totals snapshot handed to observers.

use super::money::Money;
use serde::Serialize;

/// Default flat shipping surcharge, $9.99.
pub const DEFAULT_SHIPPING_FEE: Money = Money::from_cents(999);

/// Flat-fee shipping: charged whenever the subtotal is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
  pub flat_fee: Money,
}

impl ShippingPolicy {
  pub const fn flat(flat_fee: Money) -> Self {
    Self { flat_fee }
  }

  pub fn cost(&self, subtotal: Money) -> Money {
    if subtotal.is_positive() {
      self.flat_fee
    } else {
      Money::ZERO
    }
  }
}

impl Default for ShippingPolicy {
  fn default() -> Self {
    Self::flat(DEFAULT_SHIPPING_FEE)
  }
}

/// Totals derived from the cart at one instant. Never stored by the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CartSummary {
  /// Distinct rows; this is what the header badge shows.
  pub item_count: usize,
  pub total_quantity: u64,
  #[serde(rename = "subtotal_cents")]
  pub subtotal: Money,
  #[serde(rename = "shipping_cents")]
  pub shipping: Money,
  #[serde(rename = "total_cents")]
  pub total: Money,
}
