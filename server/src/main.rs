// server/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod state;
mod web;

use crate::config::{AppConfig, LogFormat};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use jasaku_profile::{MySqlProfileStore, ProfileLookup};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

// Main function
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  // An invalid LOG_FORMAT is reported by AppConfig::from_env below.
  let log_format = std::env::var("LOG_FORMAT")
    .ok()
    .and_then(|v| v.parse::<LogFormat>().ok())
    .unwrap_or_default();
  init_tracing(log_format);

  tracing::info!("Starting jasaku profile server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e).context("Configuration error");
    }
  };

  // Connections are opened per lookup, not pooled.
  let store = MySqlProfileStore::new(
    app_config.database.connect_options.clone(),
    app_config.database.connect_timeout,
  );
  let app_state = AppState {
    lookup: ProfileLookup::new(Arc::new(store)),
    config: app_config.clone(),
  };

  if let Err(e) = app_state.lookup.check_store().await {
    // Not fatal: requests report the failure themselves.
    tracing::warn!(error = %e, "Database is not reachable at start-up.");
  }

  if app_config.cors.allowed_origin.as_deref() == Some("*") {
    tracing::warn!("CORS allows any origin. Restrict CORS_ALLOWED_ORIGIN outside development.");
  }

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!(
    route = %app_config.profile_route,
    log_format = ?app_config.log_format,
    "Attempting to bind server to {}...",
    server_address
  );

  HttpServer::new(move || {
    let route = app_state.config.profile_route.clone();
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .app_data(actix_data::PayloadConfig::new(app_state.config.max_body_bytes))
      .wrap(web::cors_headers(&app_state.config.cors))
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(move |cfg| web::configure_app_routes(cfg, &route))
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")
}
