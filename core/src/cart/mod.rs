// luxecart/src/cart/mod.rs

//! Session cart: rows, money, derived totals and change notifications.

pub mod item;
pub mod money;
pub mod observer;
pub mod pricing;
pub mod shared;
pub mod store;

pub use item::{CartItem, CartItemInput, ItemId};
pub use money::Money;
pub use observer::{CartEvent, CartObserver, SubscriptionId};
pub use pricing::{CartSummary, ShippingPolicy, DEFAULT_SHIPPING_FEE};
pub use shared::{CartSnapshot, SharedCart};
pub use store::CartStore;
