// server/src/web/handlers/health_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{instrument, warn};

use crate::state::AppState;

/// Liveness plus store reachability.
#[instrument(name = "handler::health_check", skip(app_state))]
pub async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  match app_state.lookup.check_store().await {
    Ok(()) => HttpResponse::Ok().json(json!({ "status": "ok", "database": "up" })),
    Err(e) => {
      warn!(error = %e, "Health check: database unreachable.");
      HttpResponse::ServiceUnavailable().json(json!({ "status": "degraded", "database": "down" }))
    }
  }
}
