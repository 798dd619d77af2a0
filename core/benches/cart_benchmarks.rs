use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use luxecart::{CartItemInput, CartStore, ItemId, Money, SharedCart};
use std::hint::black_box;

fn filled_cart(rows: i64) -> CartStore {
  let mut store = CartStore::new();
  for id in 0..rows {
    store
      .add_to_cart(CartItemInput::new(id, format!("Bench Product {}", id), Money::from_cents(1999 + id)).with_quantity(2))
      .unwrap();
  }
  store
}

// --- Benchmark Functions ---

fn bench_add_to_cart(c: &mut Criterion) {
  let mut group = c.benchmark_group("add_to_cart");
  for rows in [1i64, 10, 100] {
    group.throughput(Throughput::Elements(rows as u64));
    group.bench_with_input(BenchmarkId::new("distinct_rows", rows), &rows, |b, &rows| {
      b.iter(|| black_box(filled_cart(rows)))
    });
  }
  group.bench_function("repeat_same_id", |b| {
    let mut store = CartStore::new();
    b.iter(|| {
      store
        .add_to_cart(CartItemInput::new(7i64, "Repeat", Money::from_cents(1)))
        .unwrap();
    })
  });
  group.finish();
}

fn bench_derived_totals(c: &mut Criterion) {
  let mut group = c.benchmark_group("derived_totals");
  for rows in [10i64, 100] {
    let store = filled_cart(rows);
    group.bench_with_input(BenchmarkId::new("summary", rows), &store, |b, store| {
      b.iter(|| black_box(store.summary()))
    });
  }
  group.finish();
}

fn bench_shared_cart_with_observer(c: &mut Criterion) {
  let cart = SharedCart::new(filled_cart(20));
  cart.write().subscribe(|event, summary| {
    black_box((event, summary));
  });
  c.bench_function("shared_cart_update_quantity", |b| {
    let id = ItemId::Number(10);
    let mut delta = 1;
    b.iter(|| {
      cart.update_quantity(&id, delta).unwrap();
      delta = -delta;
    })
  });
}

criterion_group!(benches, bench_add_to_cart, bench_derived_totals, bench_shared_cart_with_observer);
criterion_main!(benches);
