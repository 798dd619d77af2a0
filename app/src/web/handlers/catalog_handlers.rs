// luxecart_server/src/web/handlers/catalog_handlers.rs

//! Category and deal pages.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use luxecart::catalog::{categories, deals};
use serde_json::json;
use tracing::{info, instrument};

use super::SortQuery;
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_categories")]
pub async fn list_categories_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "categories": categories::all() }))
}

#[instrument(name = "handler::get_category", skip(path, query_params), fields(slug = %path.as_ref()))]
pub async fn get_category_handler(
  path: web::Path<String>,
  query_params: web::Query<SortQuery>,
) -> Result<HttpResponse, AppError> {
  let page = categories::page(path.as_str(), query_params.order())?;
  info!(products = page.products.len(), "Category page built.");
  Ok(HttpResponse::Ok().json(json!({ "category": page.category, "products": page.products })))
}

#[instrument(name = "handler::list_deals", skip(app_state))]
pub async fn list_deals_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(json!({ "deals": app_state.deals.list() }))
}

#[instrument(name = "handler::get_deal", skip(app_state, path), fields(slug = %path.as_ref()))]
pub async fn get_deal_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let page = app_state.deals.page(path.as_str(), Utc::now())?;
  let countdown = page.remaining_secs.map(deals::countdown_label);
  Ok(HttpResponse::Ok().json(json!({
      "deal": page.deal,
      "endsAt": page.ends_at,
      "remainingSecs": page.remaining_secs,
      "countdown": countdown,
      "products": page.products
  })))
}
