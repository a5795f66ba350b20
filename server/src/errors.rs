// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use jasaku_profile::{Envelope, LookupError};
use thiserror::Error;

use crate::config::{ResponsePolicy, StatusCodeMode};
use crate::web::response::envelope_response;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  /// A lookup that ended without a profile, with the policy it is rendered under.
  #[error("Profile lookup failed: {source}")]
  Lookup {
    #[source]
    source: LookupError,
    policy: ResponsePolicy,
  },
}

impl AppError {
  pub fn lookup(source: LookupError, policy: ResponsePolicy) -> Self {
    AppError::Lookup { source, policy }
  }
}

/// Status code for a failed lookup.
///
/// Store failures are always 500. Request-level failures are 200 under
/// `compat` and 400/404 under `rest`.
pub fn lookup_status(err: &LookupError, mode: StatusCodeMode) -> StatusCode {
  match (err, mode) {
    (LookupError::Connection(_) | LookupError::Prepare(_) | LookupError::Query(_), _) => {
      StatusCode::INTERNAL_SERVER_ERROR
    }
    (LookupError::MissingEmail | LookupError::NotFound, StatusCodeMode::Compat) => StatusCode::OK,
    (LookupError::MissingEmail, StatusCodeMode::Rest) => StatusCode::BAD_REQUEST,
    (LookupError::NotFound, StatusCodeMode::Rest) => StatusCode::NOT_FOUND,
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::Lookup { source, policy } => lookup_status(source, policy.status_mode),
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    match self {
      AppError::Config(m) => {
        tracing::error!(application_error = %m, "Responding with configuration error");
        envelope_response(status, &Envelope::<()>::failure("Configuration issue"))
      }
      AppError::Lookup { source, policy } => {
        if source.is_store_failure() {
          // Full driver detail goes to the log even when the client gets the short form
          tracing::error!(lookup_error = %source, detail = source.detail().unwrap_or_default(), "Responding with store failure");
        } else {
          tracing::warn!(lookup_error = %source, status = status.as_u16(), "Responding with lookup failure");
        }
        let message = source.client_message(policy.expose_db_error_details);
        envelope_response(status, &Envelope::<()>::failure(message))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
