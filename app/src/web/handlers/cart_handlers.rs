// luxecart_server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use luxecart::{CartError, CartItemInput, CartSnapshot, ItemId, SharedCart};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use super::item_id_from_path;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::session::SessionId;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct AddFromCatalogPayload {
  pub product_id: ItemId,
  pub quantity: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateQuantityPayload {
  pub delta: i64,
}

fn cart_response(message: &str, cart: &SharedCart) -> HttpResponse {
  snapshot_response(message, cart.snapshot())
}

fn snapshot_response(message: &str, snapshot: CartSnapshot) -> HttpResponse {
  HttpResponse::Ok().json(json!({
      "message": message,
      "cart": snapshot
  }))
}

// --- Handler Implementation ---

#[instrument(name = "handler::get_cart", skip(app_state), fields(session_id = %session.0))]
pub async fn get_cart_handler(app_state: web::Data<AppState>, session: SessionId) -> HttpResponse {
  // Reading never opens a cart; unknown sessions see an empty one.
  snapshot_response("Cart fetched successfully.", app_state.sessions.snapshot(session.0))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload),
    fields(session_id = %session.0, item_id = ?req_payload.id, quantity = ?req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CartItemInput>,
  session: SessionId,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.sessions.cart(session.0);
  cart.add_to_cart(req_payload.into_inner()).map_err(|e| {
    warn!("Add to cart rejected for session {}: {}", session.0, e);
    AppError::from(e)
  })?;
  info!("Add to cart successful for session {}.", session.0);
  Ok(cart_response("Item added to cart successfully.", &cart))
}

/// Adds a catalog product by id, priced from the catalog at this moment.
#[instrument(
    name = "handler::add_from_catalog",
    skip(app_state, req_payload),
    fields(session_id = %session.0, product_id = %req_payload.product_id)
)]
pub async fn add_from_catalog_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddFromCatalogPayload>,
  session: SessionId,
) -> Result<HttpResponse, AppError> {
  let product = app_state.catalog.find_product(&req_payload.product_id).await?;
  let input = product.to_cart_input(req_payload.quantity.unwrap_or(1));

  // Resolve the cart after the catalog await so no lock spans it.
  let cart = app_state.sessions.cart(session.0);
  cart.add_to_cart(input)?;
  info!("Catalog product {} added for session {}.", product.id, session.0);
  Ok(cart_response("Item added to cart successfully.", &cart))
}

#[instrument(
    name = "handler::update_quantity",
    skip(app_state, path, req_payload),
    fields(session_id = %session.0, item_id = %path.as_ref(), delta = req_payload.delta)
)]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<UpdateQuantityPayload>,
  session: SessionId,
) -> Result<HttpResponse, AppError> {
  let item_id = item_id_from_path(path.into_inner());
  let Some(cart) = app_state.sessions.get(session.0) else {
    if item_id.is_blank() {
      return Err(AppError::from(CartError::Validation {
        field: "id",
        reason: "a product id is required".to_string(),
      }));
    }
    return Ok(snapshot_response("Quantity updated.", app_state.sessions.snapshot(session.0)));
  };
  cart.update_quantity(&item_id, req_payload.delta)?;
  Ok(cart_response("Quantity updated.", &cart))
}

#[instrument(name = "handler::remove_item", skip(app_state, path), fields(session_id = %session.0, item_id = %path.as_ref()))]
pub async fn remove_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  session: SessionId,
) -> HttpResponse {
  let item_id = item_id_from_path(path.into_inner());
  let removed = app_state
    .sessions
    .get(session.0)
    .map_or(false, |cart| cart.remove_item(&item_id));
  HttpResponse::Ok().json(json!({
      "removed": removed,
      "cart": app_state.sessions.snapshot(session.0)
  }))
}

#[instrument(name = "handler::clear_cart", skip(app_state), fields(session_id = %session.0))]
pub async fn clear_cart_handler(app_state: web::Data<AppState>, session: SessionId) -> HttpResponse {
  if let Some(cart) = app_state.sessions.get(session.0) {
    cart.clear();
  }
  snapshot_response("Cart cleared.", app_state.sessions.snapshot(session.0))
}

/// Drops the session's cart entirely; the next cart request starts fresh.
#[instrument(name = "handler::end_session", skip(app_state), fields(session_id = %session.0))]
pub async fn end_session_handler(app_state: web::Data<AppState>, session: SessionId) -> HttpResponse {
  let ended = app_state.sessions.end(session.0);
  info!("Session {} ended (had cart: {}).", session.0, ended);
  HttpResponse::Ok().json(json!({ "ended": ended }))
}
