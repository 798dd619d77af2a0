// luxecart_server/src/services/fakestore.rs

//! `ProductProvider` backed by the public FakeStore demo API.

use anyhow::Context as AnyhowContext;
use async_trait::async_trait;
use luxecart::{CatalogError, CatalogResult, ProductProvider, ProductRecord};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// One retry after the first failed attempt.
const MAX_ATTEMPTS: u32 = 2;
const RETRY_DELAY: Duration = Duration::from_millis(250);

pub struct FakeStoreProvider {
  client: reqwest::Client,
  url: String,
}

impl FakeStoreProvider {
  pub fn new(url: impl Into<String>, timeout: Duration) -> CatalogResult<Self> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .context("building FakeStore HTTP client")?;
    Ok(Self { client, url: url.into() })
  }

  async fn fetch_once(&self) -> anyhow::Result<Vec<ProductRecord>> {
    let response = self
      .client
      .get(&self.url)
      .send()
      .await
      .with_context(|| format!("requesting {}", self.url))?
      .error_for_status()
      .with_context(|| format!("FakeStore returned an error status for {}", self.url))?;
    let body = response.bytes().await.context("reading FakeStore response body")?;
    decode_products(&body).map_err(anyhow::Error::from)
  }
}

/// Decodes a FakeStore product array.
pub fn decode_products(body: &[u8]) -> CatalogResult<Vec<ProductRecord>> {
  serde_json::from_slice(body).map_err(|e| CatalogError::Decode(e.to_string()))
}

#[async_trait]
impl ProductProvider for FakeStoreProvider {
  #[instrument(name = "FakeStoreProvider::list_products", skip(self), fields(url = %self.url))]
  async fn list_products(&self) -> CatalogResult<Vec<ProductRecord>> {
    let mut attempt = 1;
    loop {
      match self.fetch_once().await {
        Ok(products) => {
          info!(count = products.len(), attempt, "Fetched products from FakeStore.");
          return Ok(products);
        }
        Err(err) => {
          // A payload we cannot decode will not improve on retry.
          if let Some(CatalogError::Decode(_)) = err.downcast_ref::<CatalogError>() {
            return Err(CatalogError::Decode(format!("{:#}", err)));
          }
          if attempt >= MAX_ATTEMPTS {
            warn!(error = %format!("{:#}", err), attempt, "FakeStore fetch failed; giving up.");
            return Err(CatalogError::Unavailable { source: err });
          }
          warn!(error = %format!("{:#}", err), attempt, "FakeStore fetch failed; retrying.");
          attempt += 1;
          tokio::time::sleep(RETRY_DELAY).await;
        }
      }
    }
  }
}
