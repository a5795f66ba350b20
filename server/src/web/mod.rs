// server/src/web/mod.rs

// Declare child modules
pub mod cors;
pub mod handlers;
pub mod response;
pub mod routes;

pub use cors::cors_headers;
pub use routes::configure_app_routes;
