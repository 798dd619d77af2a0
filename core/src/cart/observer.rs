// luxecart/src/cart/observer.rs

//! Change notifications for views that mirror the cart (badge counts,
//! order-summary panels, the HTTP layer's logs).

use super::item::ItemId;
use super::pricing::CartSummary;
use serde::Serialize;
use tracing::{event, Level};

/// What a successful mutation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartEvent {
  /// A row was created (`quantity == quantity_added`) or grown.
  ItemAdded {
    id: ItemId,
    quantity_added: u32,
    quantity: u32,
  },
  QuantityChanged {
    id: ItemId,
    from: u32,
    to: u32,
  },
  ItemRemoved {
    id: ItemId,
  },
  Cleared {
    removed_rows: usize,
  },
}

/// Observer callback. Receives the event and the totals after it was applied.
///
/// Callbacks run while the store is borrowed mutably (and, for `SharedCart`,
/// while its write lock is held); they MUST NOT call back into the cart.
pub type CartObserver = Box<dyn Fn(&CartEvent, &CartSummary) + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Observers {
  next_id: u64,
  entries: Vec<(SubscriptionId, CartObserver)>,
}

impl Observers {
  pub(crate) fn subscribe(&mut self, observer: CartObserver) -> SubscriptionId {
    let id = SubscriptionId(self.next_id);
    self.next_id += 1;
    self.entries.push((id, observer));
    event!(Level::DEBUG, subscription = id.0, "Cart observer subscribed.");
    id
  }

  pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
    let before = self.entries.len();
    self.entries.retain(|(sub_id, _)| *sub_id != id);
    before != self.entries.len()
  }

  /// Calls every observer in subscription order.
  pub(crate) fn notify(&self, cart_event: &CartEvent, summary: &CartSummary) {
    for (_, observer) in &self.entries {
      observer(cart_event, summary);
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }
}
