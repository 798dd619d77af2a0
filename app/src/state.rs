// luxecart_server/src/state.rs
use crate::config::AppConfig;
use crate::services::ChatAssistant;
use luxecart::{CartSessions, DealBoard, ProductProvider};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<dyn ProductProvider>,
  pub sessions: Arc<CartSessions>,
  pub deals: DealBoard,
  pub assistant: ChatAssistant,
  pub config: Arc<AppConfig>, // Share loaded config
}
