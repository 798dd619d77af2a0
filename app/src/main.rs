// luxecart_server/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod services;
mod state;
mod web;

use crate::config::{AppConfig, CatalogSource};
use crate::services::{ChatAssistant, FakeStoreProvider};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer};
use chrono::Utc;
use luxecart::{CartSessions, DealBoard, ProductProvider, ShippingPolicy, StaticCatalog};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

fn build_catalog(config: &AppConfig) -> errors::Result<Arc<dyn ProductProvider>> {
  match config.catalog_source {
    CatalogSource::Static => Ok(Arc::new(StaticCatalog::demo())),
    CatalogSource::FakeStore => {
      let provider = FakeStoreProvider::new(config.fakestore_url.clone(), config.catalog_timeout)?;
      Ok(Arc::new(provider))
    }
  }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting LuxeCart storefront server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  let catalog = match build_catalog(&app_config) {
    Ok(catalog) => catalog,
    Err(e) => {
      tracing::error!(error = %e, "Failed to set up the product catalog.");
      return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }
  };
  tracing::info!(source = ?app_config.catalog_source, "Product catalog ready.");

  let app_state = AppState {
    catalog,
    sessions: Arc::new(CartSessions::new(ShippingPolicy::flat(app_config.shipping_fee))),
    deals: DealBoard::new(Utc::now()),
    assistant: ChatAssistant,
    config: app_config.clone(),
  };

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
