// tests/catalog_tests.rs
mod common;

use chrono::{Duration, TimeZone, Utc};
use common::*;
use luxecart::catalog::{categories, deals, DealBoard, ProductProvider, ProductRecord, SortOrder, StaticCatalog};
use luxecart::{CartStore, CatalogError, ItemId, Money};

fn ids(products: &[ProductRecord]) -> Vec<ItemId> {
  products.iter().map(|p| p.id.clone()).collect()
}

#[tokio::test]
async fn test_demo_catalog_lists_laptops_and_premium_products() {
  setup_tracing();
  let catalog = StaticCatalog::demo();
  let products = catalog.list_products().await.unwrap();

  assert_eq!(products.len(), 10);
  assert_eq!(catalog.len(), 10);
  assert_eq!(products[0].title, "Premium Laptop 1");
  assert_eq!(products[0].price, Money::from_cents(99_999));
  assert_eq!(products[7].price, Money::from_cents(169_999));
  assert!(products[2].is_new && !products[3].is_new);
  assert_eq!(products[9].title, "Premium Product 2");
  assert_eq!(products[9].price, Money::from_cents(19_999));
}

#[tokio::test]
async fn test_find_product_by_id() {
  let catalog = StaticCatalog::demo();
  let found = catalog.find_product(&ItemId::Number(101)).await.unwrap();
  assert_eq!(found.title, "Premium Product 1");

  match catalog.find_product(&ItemId::Number(999)).await {
    Err(CatalogError::NotFound { what }) => assert!(what.contains("999")),
    other => panic!("expected NotFound, got {:?}", other),
  }
}

#[tokio::test]
async fn test_list_sorted_orders() {
  let catalog = StaticCatalog::new(vec![
    ProductRecord::new(1i64, "Mid", Money::from_cents(500)).with_rating(4.0, 10),
    ProductRecord::new(2i64, "Cheap", Money::from_cents(100)).with_rating(3.5, 250),
    ProductRecord::new(3i64, "Dear", Money::from_cents(900)),
  ]);

  let newest = catalog.list_sorted(SortOrder::Newest).await.unwrap();
  assert_eq!(ids(&newest), vec![ItemId::Number(3), ItemId::Number(2), ItemId::Number(1)]);

  let low = catalog.list_sorted(SortOrder::PriceLow).await.unwrap();
  assert_eq!(ids(&low), vec![ItemId::Number(2), ItemId::Number(1), ItemId::Number(3)]);

  let high = catalog.list_sorted(SortOrder::PriceHigh).await.unwrap();
  assert_eq!(ids(&high), vec![ItemId::Number(3), ItemId::Number(1), ItemId::Number(2)]);

  let popular = catalog.list_sorted(SortOrder::Popular).await.unwrap();
  assert_eq!(ids(&popular), vec![ItemId::Number(2), ItemId::Number(1), ItemId::Number(3)]);
}

#[test]
fn test_sort_order_parsing_falls_back_to_newest() {
  assert_eq!("price-low".parse::<SortOrder>().unwrap(), SortOrder::PriceLow);
  assert_eq!("price-high".parse::<SortOrder>().unwrap(), SortOrder::PriceHigh);
  assert_eq!("popular".parse::<SortOrder>().unwrap(), SortOrder::Popular);
  assert_eq!("bogus".parse::<SortOrder>().unwrap(), SortOrder::Newest);
}

#[test]
fn test_fakestore_record_decodes_and_feeds_cart() {
  let payload = r#"{
    "id": 1,
    "title": "Fjallraven - Foldsack No. 1 Backpack",
    "price": 109.95,
    "description": "Your perfect pack for everyday use",
    "category": "men's clothing",
    "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
    "rating": { "rate": 3.9, "count": 120 }
  }"#;
  let record: ProductRecord = serde_json::from_str(payload).unwrap();
  assert_eq!(record.id, ItemId::Number(1));
  assert_eq!(record.price, Money::from_cents(10995));
  assert_eq!(record.rating.map(|r| r.count), Some(120));

  let mut store = CartStore::new();
  store.add_to_cart(record.to_cart_input(2)).unwrap();
  assert_eq!(store.subtotal(), Money::from_cents(21990));
  assert_eq!(store.items()[0].category.as_deref(), Some("men's clothing"));
}

#[test]
fn test_categories_lookup() {
  assert_eq!(categories::all().len(), 8);
  let tvs = categories::find("tvs").unwrap();
  assert_eq!(tvs.name, "TVs");
  assert_eq!(tvs.product_count, 56);
  assert!(matches!(categories::find("toasters"), Err(CatalogError::NotFound { .. })));
}

#[test]
fn test_category_page_sorting() {
  let page = categories::page("laptops", SortOrder::PriceHigh).unwrap();
  assert_eq!(page.category.description, Some("Powerful laptops for work and play"));
  assert_eq!(page.products.len(), 8);
  assert_eq!(page.products[0].title, "Premium Laptop 8");

  let cameras = categories::page("cameras", SortOrder::Newest).unwrap();
  assert!(cameras.products.is_empty());
}

#[test]
fn test_deal_products_are_stable_and_in_range() {
  let first = deals::deal_products("flash-sale");
  let again = deals::deal_products("flash-sale");
  assert_eq!(first, again);
  assert_eq!(first.len(), 6);

  for product in &first {
    assert!((5_000..=25_000).contains(&product.price.cents()));
    assert!((10..=39).contains(&product.discount_percent));
    assert_eq!(product.deal_price, product.price.discounted(product.discount_percent));
    assert!(product.deal_price < product.price);
  }
}

#[test]
fn test_flash_sale_countdown() {
  let opened = Utc.with_ymd_and_hms(2024, 11, 29, 9, 0, 0).unwrap();
  let board = DealBoard::new(opened);

  let page = board.page("flash-sale", opened + Duration::seconds(30)).unwrap();
  assert_eq!(page.ends_at, Some(opened + Duration::minutes(10)));
  assert_eq!(page.remaining_secs, Some(570));
  assert_eq!(deals::countdown_label(570), "09:30");

  let late = board.page("flash-sale", opened + Duration::hours(1)).unwrap();
  assert_eq!(late.remaining_secs, Some(0));

  let bundles = board.page("bundles", opened).unwrap();
  assert_eq!(bundles.ends_at, None);
  assert_eq!(bundles.deal.name, "Bundles & Combos");

  assert!(matches!(board.page("black-friday", opened), Err(CatalogError::NotFound { .. })));
  assert_eq!(board.list().len(), 4);
}
