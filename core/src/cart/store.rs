// luxecart/src/cart/store.rs

//! The cart store: the ordered rows of one session's cart and the only
//! surface allowed to change them.

use super::item::{CartItem, CartItemInput, ItemId};
use super::money::Money;
use super::observer::{CartEvent, CartObserver, Observers, SubscriptionId};
use super::pricing::{CartSummary, ShippingPolicy};
use crate::error::{CartError, CartResult};
use std::fmt;
use tracing::{event, instrument, Level};

#[derive(Default)]
pub struct CartStore {
  items: Vec<CartItem>,
  shipping: ShippingPolicy,
  observers: Observers,
}

impl CartStore {
  /// An empty cart using the default $9.99 flat shipping.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_shipping(shipping: ShippingPolicy) -> Self {
    Self {
      shipping,
      ..Self::default()
    }
  }

  // --- Mutations ---

  /// Adds a product to the cart.
  ///
  /// Adding an id that is already present sums the incoming quantity into
  /// the existing row; the row keeps the price it was first added at.
  /// Missing/blank ids, negative prices, quantities below 1 and amounts that
  /// would overflow are rejected with `CartError::Validation` and leave the
  /// cart untouched.
  #[instrument(
    name = "CartStore::add_to_cart",
    skip(self, input),
    fields(item_id = ?input.id, quantity = ?input.quantity),
    err(Display)
  )]
  pub fn add_to_cart(&mut self, input: CartItemInput) -> CartResult<()> {
    let CartItemInput {
      id,
      name,
      category,
      price,
      quantity,
      image,
    } = input;

    let id = match id {
      Some(id) if !id.is_blank() => id,
      _ => return Err(CartError::validation("id", "a product id is required")),
    };
    if price.is_negative() {
      return Err(CartError::validation("price", format!("price {} must not be negative", price)));
    }
    let requested = quantity.unwrap_or(1);
    if requested < 1 {
      return Err(CartError::validation(
        "quantity",
        format!("quantity must be at least 1, got {}", requested),
      ));
    }
    let added = u32::try_from(requested)
      .map_err(|_| CartError::validation("quantity", format!("quantity {} is too large", requested)))?;

    let cart_event = match self.items.iter_mut().find(|row| row.id == id) {
      Some(row) => {
        let quantity = row
          .quantity
          .checked_add(added)
          .ok_or_else(|| CartError::validation("quantity", format!("quantity for {} would overflow", id)))?;
        ensure_line_fits(row.price, quantity, &id)?;
        if row.price != price {
          event!(Level::DEBUG, item_id = %id, kept = %row.price, offered = %price, "Keeping price captured at first add.");
        }
        row.quantity = quantity;
        CartEvent::ItemAdded {
          id,
          quantity_added: added,
          quantity,
        }
      }
      None => {
        ensure_line_fits(price, added, &id)?;
        self.items.push(CartItem {
          id: id.clone(),
          name,
          category,
          price,
          quantity: added,
          image,
        });
        CartEvent::ItemAdded {
          id,
          quantity_added: added,
          quantity: added,
        }
      }
    };

    event!(Level::INFO, event = ?cart_event, "Cart item added.");
    self.notify(&cart_event);
    Ok(())
  }

  /// Adjusts a row's quantity by `delta`, clamped so it never drops below 1.
  /// Unknown ids are a no-op.
  #[instrument(name = "CartStore::update_quantity", skip(self), fields(item_id = %id), err(Display))]
  pub fn update_quantity(&mut self, id: &ItemId, delta: i64) -> CartResult<()> {
    if id.is_blank() {
      return Err(CartError::validation("id", "a product id is required"));
    }
    let Some(row) = self.items.iter_mut().find(|row| &row.id == id) else {
      event!(Level::DEBUG, "Quantity update for absent item ignored.");
      return Ok(());
    };

    let from = row.quantity;
    let target = (i64::from(from).saturating_add(delta)).clamp(1, i64::from(u32::MAX));
    // Clamped above, the conversion cannot fail.
    let to = u32::try_from(target).unwrap_or(u32::MAX);
    if to == from {
      return Ok(());
    }
    ensure_line_fits(row.price, to, id)?;
    row.quantity = to;

    let cart_event = CartEvent::QuantityChanged { id: id.clone(), from, to };
    event!(Level::INFO, from, to, "Cart item quantity changed.");
    self.notify(&cart_event);
    Ok(())
  }

  /// Removes the row for `id`. Returns whether anything was removed.
  #[instrument(name = "CartStore::remove_item", skip(self), fields(item_id = %id))]
  pub fn remove_item(&mut self, id: &ItemId) -> bool {
    let Some(idx) = self.items.iter().position(|row| &row.id == id) else {
      return false;
    };
    self.items.remove(idx);
    event!(Level::INFO, "Cart item removed.");
    self.notify(&CartEvent::ItemRemoved { id: id.clone() });
    true
  }

  /// Empties the cart. Observers hear about it only if there was something to drop.
  pub fn clear(&mut self) {
    if self.items.is_empty() {
      return;
    }
    let removed_rows = self.items.len();
    self.items.clear();
    event!(Level::INFO, removed_rows, "Cart cleared.");
    self.notify(&CartEvent::Cleared { removed_rows });
  }

  // --- Reads ---

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
    self.items.iter().find(|row| &row.id == id)
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn item_count(&self) -> usize {
    self.items.len()
  }

  pub fn total_quantity(&self) -> u64 {
    self.items.iter().map(|row| u64::from(row.quantity)).sum()
  }

  pub fn shipping_policy(&self) -> ShippingPolicy {
    self.shipping
  }

  /// Σ price × quantity over the current rows, recomputed on every call.
  pub fn subtotal(&self) -> Money {
    self.items.iter().map(CartItem::line_total).sum()
  }

  pub fn shipping_cost(&self, subtotal: Money) -> Money {
    self.shipping.cost(subtotal)
  }

  pub fn total(&self) -> Money {
    let subtotal = self.subtotal();
    subtotal + self.shipping_cost(subtotal)
  }

  pub fn summary(&self) -> CartSummary {
    let subtotal = self.subtotal();
    let shipping = self.shipping_cost(subtotal);
    CartSummary {
      item_count: self.item_count(),
      total_quantity: self.total_quantity(),
      subtotal,
      shipping,
      total: subtotal + shipping,
    }
  }

  // --- Observers ---

  pub fn subscribe(&mut self, observer: impl Fn(&CartEvent, &CartSummary) + Send + Sync + 'static) -> SubscriptionId {
    let boxed: CartObserver = Box::new(observer);
    self.observers.subscribe(boxed)
  }

  pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
    self.observers.unsubscribe(id)
  }

  pub fn observer_count(&self) -> usize {
    self.observers.len()
  }

  fn notify(&self, cart_event: &CartEvent) {
    let summary = self.summary();
    self.observers.notify(cart_event, &summary);
  }
}

fn ensure_line_fits(price: Money, quantity: u32, id: &ItemId) -> CartResult<()> {
  price
    .checked_mul(quantity)
    .map(|_| ())
    .ok_or_else(|| CartError::validation("quantity", format!("line total for {} would overflow", id)))
}

impl fmt::Debug for CartStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CartStore")
      .field("items", &self.items)
      .field("shipping", &self.shipping)
      .field("observer_count", &self.observers.len())
      .finish()
  }
}
