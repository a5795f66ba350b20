// server/src/web/routes.rs

use actix_web::http::Method;
use actix_web::web;

use crate::web::handlers::health_handlers::health_check_handler;
use crate::web::handlers::profile_handlers::{preflight_handler, profile_lookup_handler};

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig, profile_route: &str) {
  cfg
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    // Profile lookup: POST does the work, OPTIONS answers pre-flight.
    // Other methods get actix's 405.
    .service(
      web::resource(profile_route.to_owned())
        .route(web::post().to(profile_lookup_handler))
        .route(web::route().method(Method::OPTIONS).to(preflight_handler)),
    );
}
