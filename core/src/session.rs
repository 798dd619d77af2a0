// luxecart/src/session.rs

//! `CartSessions`: a registry of per-session carts keyed by session id.
//! Each session owns an independent `SharedCart`; nothing outlives the process.

use crate::cart::{CartSnapshot, CartSummary, ShippingPolicy, SharedCart};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{event, Level};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct CartSessions {
  carts: RwLock<HashMap<Uuid, SharedCart>>,
  shipping: ShippingPolicy,
}

impl CartSessions {
  pub fn new(shipping: ShippingPolicy) -> Self {
    Self {
      carts: RwLock::new(HashMap::new()),
      shipping,
    }
  }

  /// Returns the session's cart, creating an empty one on first use.
  pub fn cart(&self, session_id: Uuid) -> SharedCart {
    if let Some(cart) = self.carts.read().get(&session_id) {
      return cart.clone();
    }
    self
      .carts
      .write()
      .entry(session_id)
      .or_insert_with(|| {
        event!(Level::DEBUG, %session_id, "Opening cart for new session.");
        SharedCart::with_shipping(self.shipping)
      })
      .clone()
  }

  /// The session's cart if it has been opened.
  pub fn get(&self, session_id: Uuid) -> Option<SharedCart> {
    self.carts.read().get(&session_id).cloned()
  }

  /// Rows and totals of the session's cart, or an empty snapshot when the
  /// session has none. Never opens a cart.
  pub fn snapshot(&self, session_id: Uuid) -> CartSnapshot {
    match self.get(session_id) {
      Some(cart) => cart.snapshot(),
      None => CartSnapshot {
        items: Vec::new(),
        summary: CartSummary::default(),
      },
    }
  }

  /// Drops the session's cart. Returns whether one existed.
  pub fn end(&self, session_id: Uuid) -> bool {
    let removed = self.carts.write().remove(&session_id).is_some();
    if removed {
      event!(Level::DEBUG, %session_id, "Session cart dropped.");
    }
    removed
  }

  pub fn len(&self) -> usize {
    self.carts.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.carts.read().is_empty()
  }

  pub fn shipping_policy(&self) -> ShippingPolicy {
    self.shipping
  }
}
