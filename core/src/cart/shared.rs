// luxecart/src/cart/shared.rs
use super::item::{CartItem, CartItemInput, ItemId};
use super::pricing::{CartSummary, ShippingPolicy};
use super::store::CartStore;
use crate::error::CartResult;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::Serialize;
use std::sync::Arc;

/// Cloneable handle to one session's `CartStore`. Every clone sees the same cart.
///
/// IMPORTANT: guards returned by `read`/`write` are blocking and MUST NOT be
/// held across `.await` points.
#[derive(Debug, Clone, Default)]
pub struct SharedCart(Arc<RwLock<CartStore>>);

/// Owned copy of the cart's rows and totals, safe to serialize after the lock is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
  pub items: Vec<CartItem>,
  pub summary: CartSummary,
}

impl SharedCart {
  pub fn new(store: CartStore) -> Self {
    SharedCart(Arc::new(RwLock::new(store)))
  }

  pub fn with_shipping(shipping: ShippingPolicy) -> Self {
    Self::new(CartStore::with_shipping(shipping))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, CartStore> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, CartStore> {
    self.0.write()
  }

  pub fn add_to_cart(&self, input: CartItemInput) -> CartResult<()> {
    self.write().add_to_cart(input)
  }

  pub fn update_quantity(&self, id: &ItemId, delta: i64) -> CartResult<()> {
    self.write().update_quantity(id, delta)
  }

  pub fn remove_item(&self, id: &ItemId) -> bool {
    self.write().remove_item(id)
  }

  pub fn clear(&self) {
    self.write().clear()
  }

  pub fn summary(&self) -> CartSummary {
    self.read().summary()
  }

  pub fn snapshot(&self) -> CartSnapshot {
    let guard = self.read();
    CartSnapshot {
      items: guard.items().to_vec(),
      summary: guard.summary(),
    }
  }

  /// True when both handles point at the same cart.
  pub fn ptr_eq(&self, other: &SharedCart) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}
