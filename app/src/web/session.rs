// luxecart_server/src/web/session.rs

use actix_web::{FromRequest, HttpRequest};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;

pub const SESSION_HEADER: &str = "X-Session-ID";

/// The browsing session a request belongs to, taken from the `X-Session-ID`
/// header. The front end mints the UUID once and sends it on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

impl FromRequest for SessionId {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let parsed = req
      .headers()
      .get(SESSION_HEADER)
      .and_then(|value| value.to_str().ok())
      .and_then(|raw| Uuid::parse_str(raw.trim()).ok());

    match parsed {
      Some(id) => futures_util::future::ready(Ok(SessionId(id))),
      None => {
        warn!("SessionId extractor: Missing or invalid {} header.", SESSION_HEADER);
        futures_util::future::ready(Err(AppError::Session(format!(
          "A valid {} header (UUID) is required for cart operations.",
          SESSION_HEADER
        ))))
      }
    }
  }
}
