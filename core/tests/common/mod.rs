// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper.

use luxecart::{CartEvent, CartItemInput, CartStore, CartSummary, Money};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

// --- Fixtures ---

pub fn premium_product(id: i64) -> CartItemInput {
  CartItemInput::new(id, format!("Premium Product {}", id), Money::from_cents(19999))
    .with_category("Electronics")
    .with_image(format!("https://source.unsplash.com/random/80x80?product={}", id))
}

pub fn cart_with(inputs: Vec<CartItemInput>) -> CartStore {
  let mut store = CartStore::new();
  for input in inputs {
    store.add_to_cart(input).expect("fixture input must be valid");
  }
  store
}

// --- Observer recorder ---

/// Collects every notification an observer receives.
#[derive(Clone, Default)]
pub struct Recorder {
  pub seen: Arc<Mutex<Vec<(CartEvent, CartSummary)>>>,
}

impl Recorder {
  pub fn attach(&self, store: &mut CartStore) -> luxecart::SubscriptionId {
    let seen = self.seen.clone();
    store.subscribe(move |event, summary| seen.lock().push((event.clone(), *summary)))
  }

  pub fn events(&self) -> Vec<CartEvent> {
    self.seen.lock().iter().map(|(e, _)| e.clone()).collect()
  }

  pub fn len(&self) -> usize {
    self.seen.lock().len()
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Global notification counter, shared by tests marked #[serial] ---
pub static NOTIFY_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_notify_counter() {
  NOTIFY_COUNTER.store(0, Ordering::SeqCst);
}

pub fn notify_count() -> usize {
  NOTIFY_COUNTER.load(Ordering::SeqCst)
}
