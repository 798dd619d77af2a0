// luxecart_server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use super::{item_id_from_path, SortQuery};
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state, query_params), fields(sort = ?query_params.sort))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<SortQuery>,
) -> Result<HttpResponse, AppError> {
  let order = query_params.order();
  let products = app_state.catalog.list_sorted(order).await?;

  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "sort": order,
      "products": products
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = item_id_from_path(path.into_inner());
  let product = app_state.catalog.find_product(&product_id).await?;

  info!("Product {} fetched successfully.", product_id);
  Ok(HttpResponse::Ok().json(json!({
      "message": "Product fetched successfully.",
      "product": product
  })))
}
