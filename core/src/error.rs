// luxecart/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Rejections raised by the cart store. A rejected operation never
/// changes cart contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
  #[error("Invalid cart input for '{field}': {reason}")]
  Validation { field: &'static str, reason: String },
}

impl CartError {
  pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
    CartError::Validation {
      field,
      reason: reason.into(),
    }
  }
}

/// Failures while reading the product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Catalog entry not found: {what}")]
  NotFound { what: String },

  #[error("Catalog source unavailable. Source: {source}")]
  Unavailable {
    #[source]
    source: AnyhowError,
  },

  #[error("Catalog payload could not be decoded: {0}")]
  Decode(String),
}

impl CatalogError {
  pub fn not_found(what: impl Into<String>) -> Self {
    CatalogError::NotFound { what: what.into() }
  }
}

// Provider implementations that use `?` on anyhow-returning helpers land here.
impl From<AnyhowError> for CatalogError {
  fn from(err: AnyhowError) -> Self {
    CatalogError::Unavailable { source: err }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
