// luxecart/src/lib.rs

//! LuxeCart: the storefront's session cart and catalog model.
//!
//! The crate provides:
//!  - `CartStore`, the single mutation surface for a session's cart, with
//!    derived subtotal/shipping/total and explicit change notifications.
//!  - `SharedCart`, a cloneable lock-guarded handle so several views share one cart.
//!  - `CartSessions`, one independent cart per session id.
//!  - The `ProductProvider` seam plus a static demo catalog, listing order,
//!    categories and promotional deals.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod session;

// --- Re-exports for the Public API ---

pub use crate::cart::{
  CartEvent, CartItem, CartItemInput, CartSnapshot, CartStore, CartSummary, ItemId, Money, ShippingPolicy, SharedCart,
  SubscriptionId,
};
pub use crate::catalog::{DealBoard, ProductProvider, ProductRecord, SortOrder, StaticCatalog};
pub use crate::error::{CartError, CartResult, CatalogError, CatalogResult};
pub use crate::session::CartSessions;

/*
    Typical flow:
    1. Build a `CartSessions` with the configured `ShippingPolicy`.
    2. Resolve the caller's session id to a `SharedCart` via `sessions.cart(id)`.
    3. Look products up through a `ProductProvider` and turn them into
       `CartItemInput`s with `ProductRecord::to_cart_input`.
    4. Mutate through `add_to_cart` / `update_quantity` / `remove_item`;
       subscribers registered with `CartStore::subscribe` hear each change.
    5. Render from `SharedCart::snapshot()`, which copies rows and totals out of the lock.
*/
