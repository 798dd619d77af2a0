// luxecart_server/src/web/routes.rs

use actix_web::web;

use crate::state::AppState;
use crate::web::handlers::{cart_handlers, catalog_handlers, chat_handlers, product_handlers};

async fn health_check_handler(app_state: web::Data<AppState>) -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({
    "status": "ok",
    "catalogSource": format!("{:?}", app_state.config.catalog_source),
    "shippingFeeCents": app_state.config.shipping_fee,
    "openSessions": app_state.sessions.len(),
  }))
}

// Called in `main.rs` (and the handler tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
      )
      .service(
        web::scope("/categories")
          .route("", web::get().to(catalog_handlers::list_categories_handler))
          .route("/{slug}", web::get().to(catalog_handlers::get_category_handler)),
      )
      .service(
        web::scope("/deals")
          .route("", web::get().to(catalog_handlers::list_deals_handler))
          .route("/{slug}", web::get().to(catalog_handlers::get_deal_handler)),
      )
      // Cart routes are keyed by the X-Session-ID header.
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::get_cart_handler))
          .route("", web::delete().to(cart_handlers::clear_cart_handler))
          .route("/items", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/items/from-catalog", web::post().to(cart_handlers::add_from_catalog_handler))
          .route("/items/{item_id}", web::patch().to(cart_handlers::update_quantity_handler))
          .route("/items/{item_id}", web::delete().to(cart_handlers::remove_item_handler)),
      )
      .route("/session", web::delete().to(cart_handlers::end_session_handler))
      .service(
        web::scope("/chat")
          .route("", web::get().to(chat_handlers::chat_greeting_handler))
          .route("", web::post().to(chat_handlers::chat_handler)),
      ),
  );
}
