// server/src/web/response.rs

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use jasaku_profile::Envelope;
use serde::Serialize;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Serializes `envelope` with an explicit UTF-8 JSON content type.
pub fn envelope_response<T: Serialize>(status: StatusCode, envelope: &Envelope<T>) -> HttpResponse {
  match serde_json::to_string(envelope) {
    Ok(body) => HttpResponse::build(status).content_type(JSON_UTF8).body(body),
    Err(e) => {
      tracing::error!(error = %e, "Failed to serialize response envelope.");
      HttpResponse::InternalServerError()
        .content_type(JSON_UTF8)
        .body(r#"{"success":false,"message":"Internal server error"}"#)
    }
  }
}
