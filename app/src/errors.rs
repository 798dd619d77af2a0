// luxecart_server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use luxecart::{CartError, CatalogError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Session Error: {0}")]
  Session(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Catalog Upstream Error: {0}")]
  Upstream(String),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl From<CartError> for AppError {
  fn from(err: CartError) -> Self {
    AppError::Validation(err.to_string())
  }
}

impl From<CatalogError> for AppError {
  fn from(err: CatalogError) -> Self {
    match err {
      CatalogError::NotFound { what } => AppError::NotFound(what),
      CatalogError::Unavailable { source } => AppError::Upstream(format!("{:#}", source)),
      CatalogError::Decode(m) => AppError::Upstream(m),
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Session(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Upstream(m) => {
        HttpResponse::BadGateway().json(json!({"error": "Product catalog is unavailable", "detail": m}))
      }
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
