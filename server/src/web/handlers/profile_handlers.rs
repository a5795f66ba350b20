// server/src/web/handlers/profile_handlers.rs

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use jasaku_profile::Envelope;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::response::envelope_response;

// --- Handler Implementations ---

/// `POST` on the profile route.
///
/// The body is taken as raw bytes: malformed JSON must produce the
/// "Missing email field" envelope, not actix's JSON extractor error.
#[instrument(name = "handler::profile_lookup", skip(app_state, body), fields(body_len = body.len()))]
pub async fn profile_lookup_handler(
  app_state: web::Data<AppState>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let profile = app_state
    .lookup
    .lookup_body(&body)
    .await
    .map_err(|e| AppError::lookup(e, app_state.config.response))?;

  info!(user_id = profile.id, "Profile lookup succeeded.");
  Ok(envelope_response(StatusCode::OK, &Envelope::success(profile)))
}

/// `OPTIONS` on the profile route: empty 204 whatever the request carries.
pub async fn preflight_handler() -> HttpResponse {
  HttpResponse::NoContent().finish()
}
