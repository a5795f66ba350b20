// server/src/web/cors.rs

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

use crate::config::CorsConfig;

pub const ALLOWED_METHODS: &str = "POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Static CORS headers for every response, or none when no origin is configured.
pub fn cors_headers(cors: &CorsConfig) -> DefaultHeaders {
  match &cors.allowed_origin {
    Some(origin) => DefaultHeaders::new()
      .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone()))
      .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
      .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS)),
    None => DefaultHeaders::new(),
  }
}
