// luxecart_server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use luxecart::Money;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_FAKESTORE_URL: &str = "https://fakestoreapi.com/products";

/// Where the product listing comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
  /// Built-in demo catalog.
  Static,
  /// The public FakeStore demo API.
  FakeStore,
}

impl FromStr for CatalogSource {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "static" => Ok(CatalogSource::Static),
      "fakestore" => Ok(CatalogSource::FakeStore),
      other => Err(AppError::Config(format!(
        "Invalid CATALOG_SOURCE '{}': expected 'static' or 'fakestore'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub catalog_source: CatalogSource,
  pub fakestore_url: String,
  pub catalog_timeout: Duration,
  pub shipping_fee: Money,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable lookup; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let catalog_source = get_or("CATALOG_SOURCE", "static").parse::<CatalogSource>()?;
    let fakestore_url = get_or("FAKESTORE_URL", DEFAULT_FAKESTORE_URL);
    let catalog_timeout_secs = get_or("CATALOG_TIMEOUT_SECS", "5")
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid CATALOG_TIMEOUT_SECS: {}", e)))?;
    let shipping_fee_cents = get_or("SHIPPING_FEE_CENTS", "999")
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid SHIPPING_FEE_CENTS: {}", e)))?;
    if shipping_fee_cents < 0 {
      return Err(AppError::Config("SHIPPING_FEE_CENTS must not be negative".to_string()));
    }

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      catalog_source,
      fakestore_url,
      catalog_timeout: Duration::from_secs(catalog_timeout_secs),
      shipping_fee: Money::from_cents(shipping_fee_cents),
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| vars.get(name).cloned()
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
    assert_eq!(cfg.catalog_source, CatalogSource::Static);
    assert_eq!(cfg.fakestore_url, DEFAULT_FAKESTORE_URL);
    assert_eq!(cfg.catalog_timeout, Duration::from_secs(5));
    assert_eq!(cfg.shipping_fee, Money::from_cents(999));
  }

  #[test]
  fn overrides_are_parsed() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
      ("SERVER_PORT", "9000"),
      ("CATALOG_SOURCE", "FakeStore"),
      ("SHIPPING_FEE_CENTS", "0"),
    ]))
    .unwrap();
    assert_eq!(cfg.server_port, 9000);
    assert_eq!(cfg.catalog_source, CatalogSource::FakeStore);
    assert_eq!(cfg.shipping_fee, Money::ZERO);
  }

  #[test]
  fn invalid_values_are_config_errors() {
    for pairs in [
      [("SERVER_PORT", "not-a-port")],
      [("CATALOG_SOURCE", "database")],
      [("SHIPPING_FEE_CENTS", "-1")],
    ] {
      assert!(matches!(AppConfig::from_lookup(lookup_from(&pairs)), Err(AppError::Config(_))));
    }
  }
}
