// luxecart_server/src/web/handlers/chat_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ChatPayload {
  pub message: String,
}

#[instrument(name = "handler::chat_greeting", skip(app_state))]
pub async fn chat_greeting_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(json!({ "messages": [app_state.assistant.greeting(Utc::now())] }))
}

#[instrument(name = "handler::chat", skip(app_state, req_payload))]
pub async fn chat_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ChatPayload>,
) -> Result<HttpResponse, AppError> {
  let messages = app_state
    .assistant
    .exchange(&req_payload.message, Utc::now())
    .ok_or_else(|| AppError::Validation("Message must not be empty.".to_string()))?;
  Ok(HttpResponse::Ok().json(json!({ "messages": messages })))
}
