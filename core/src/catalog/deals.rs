// luxecart/src/catalog/deals.rs

//! Promotional deals: four fixed campaigns, each with a generated list of
//! discounted products. Listings are seeded from the deal slug so a page
//! shows the same prices on every request.

use crate::cart::{ItemId, Money};
use crate::error::{CatalogError, CatalogResult};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const PRODUCTS_PER_DEAL: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deal {
  pub slug: &'static str,
  pub name: &'static str,
  /// Short teaser shown on the deals grid.
  pub headline: &'static str,
  pub title: &'static str,
  pub description: &'static str,
  /// Flash sales close this many seconds after the board opens.
  #[serde(skip)]
  pub countdown_secs: Option<i64>,
}

pub const DEALS: [Deal; 4] = [
  Deal {
    slug: "flash-sale",
    name: "Flash Sale",
    headline: "Up to 50% Off",
    title: "Limited-Time Flash Sale!",
    description: "Hurry up! These discounts are valid only for a short time.",
    countdown_secs: Some(10 * 60),
  },
  Deal {
    slug: "exclusive-offers",
    name: "Exclusive Offers",
    headline: "Limited-Time Discounts",
    title: "Exclusive Offers",
    description: "Get the best exclusive deals available only on LuxeCart.",
    countdown_secs: None,
  },
  Deal {
    slug: "bundles",
    name: "Bundles & Combos",
    headline: "Save More on Combos",
    title: "Bundles & Combos",
    description: "Save more when you buy in bundles! Check out our combos.",
    countdown_secs: None,
  },
  Deal {
    slug: "trending",
    name: "Top Trending",
    headline: "Hottest Deals Right Now",
    title: "Trending Deals",
    description: "Discover the hottest deals that are trending right now!",
    countdown_secs: None,
  },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealProduct {
  pub id: ItemId,
  pub name: String,
  #[serde(rename = "price_cents")]
  pub price: Money,
  pub discount_percent: u8,
  #[serde(rename = "deal_price_cents")]
  pub deal_price: Money,
  pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealPage {
  pub deal: Deal,
  pub ends_at: Option<DateTime<Utc>>,
  pub remaining_secs: Option<i64>,
  pub products: Vec<DealProduct>,
}

/// Deal listings anchored at the moment the storefront opened, so the
/// flash-sale countdown runs from process start.
#[derive(Debug, Clone, Copy)]
pub struct DealBoard {
  opened_at: DateTime<Utc>,
}

impl DealBoard {
  pub fn new(opened_at: DateTime<Utc>) -> Self {
    Self { opened_at }
  }

  pub fn opened_at(&self) -> DateTime<Utc> {
    self.opened_at
  }

  pub fn list(&self) -> &'static [Deal] {
    &DEALS
  }

  pub fn page(&self, slug: &str, now: DateTime<Utc>) -> CatalogResult<DealPage> {
    let deal = *DEALS
      .iter()
      .find(|d| d.slug == slug)
      .ok_or_else(|| CatalogError::not_found(format!("deal '{}'", slug)))?;
    let ends_at = deal
      .countdown_secs
      .map(|secs| self.opened_at + Duration::seconds(secs));
    let remaining_secs = ends_at.map(|end| (end - now).num_seconds().max(0));
    Ok(DealPage {
      deal,
      ends_at,
      remaining_secs,
      products: deal_products(deal.slug),
    })
  }
}

/// `MM:SS` label for a countdown, as shown next to the flash-sale banner.
pub fn countdown_label(remaining_secs: i64) -> String {
  let secs = remaining_secs.max(0);
  format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Six products priced $50–$250 with 10–39% off.
pub fn deal_products(slug: &str) -> Vec<DealProduct> {
  let mut rng = StdRng::seed_from_u64(slug_seed(slug));
  (1..=PRODUCTS_PER_DEAL)
    .map(|i| {
      let price = Money::from_cents(rng.gen_range(5_000..=25_000));
      let discount_percent: u8 = rng.gen_range(10..=39);
      DealProduct {
        id: ItemId::Number(i),
        name: format!("Product {}", i),
        price,
        discount_percent,
        deal_price: price.discounted(discount_percent),
        image: format!("https://source.unsplash.com/random/400x400?product={}", i),
      }
    })
    .collect()
}

// FNV-1a; stable across runs and toolchains.
fn slug_seed(slug: &str) -> u64 {
  slug
    .bytes()
    .fold(0xcbf2_9ce4_8422_2325, |hash, b| (hash ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn countdown_label_pads_minutes_and_seconds() {
    assert_eq!(countdown_label(599), "09:59");
    assert_eq!(countdown_label(61), "01:01");
    assert_eq!(countdown_label(-5), "00:00");
  }

  #[test]
  fn slug_seed_distinguishes_deals() {
    assert_ne!(slug_seed("flash-sale"), slug_seed("bundles"));
    assert_eq!(slug_seed("trending"), slug_seed("trending"));
  }
}
