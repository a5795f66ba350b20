// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use actix_web::http::header::HeaderValue;
use dotenvy::dotenv;
use sqlx::mysql::MySqlConnectOptions;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// How request-level lookup failures map to HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusCodeMode {
  /// 200 for "Missing email field" and "User not found".
  #[default]
  Compat,
  /// 400 and 404 respectively.
  Rest,
}

impl FromStr for StatusCodeMode {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "compat" => Ok(StatusCodeMode::Compat),
      "rest" => Ok(StatusCodeMode::Rest),
      other => Err(AppError::Config(format!(
        "Invalid STATUS_CODE_MODE '{}': expected 'compat' or 'rest'",
        other
      ))),
    }
  }
}

/// Rendering rules for failed lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsePolicy {
  pub status_mode: StatusCodeMode,
  pub expose_db_error_details: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!(
        "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
        other
      ))),
    }
  }
}

/// CORS headers sent with every response. `None` sends no CORS headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
  pub allowed_origin: Option<String>,
}

#[derive(Clone)]
pub struct DatabaseConfig {
  pub connect_options: MySqlConnectOptions,
  pub connect_timeout: Duration,
}

// Connect options carry the password; keep it out of Debug output.
impl std::fmt::Debug for DatabaseConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DatabaseConfig")
      .field("host", &self.connect_options.get_host())
      .field("port", &self.connect_options.get_port())
      .field("database", &self.connect_options.get_database())
      .field("connect_timeout", &self.connect_timeout)
      .finish_non_exhaustive()
  }
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub profile_route: String,
  pub database: DatabaseConfig,
  pub cors: CorsConfig,
  pub response: ResponsePolicy,
  pub max_body_bytes: usize,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from any variable source.
  ///
  /// Unset and empty variables fall back to their defaults, except
  /// `DB_PASSWORD`, where empty is a valid value.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| lookup(var_name).filter(|v| !v.trim().is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = parse_or("SERVER_PORT", get_env("SERVER_PORT"), 8080u16)?;

    let profile_route = get_env("PROFILE_ROUTE").unwrap_or_else(|| "/api/user/profile".to_string());
    if !profile_route.starts_with('/') {
      return Err(AppError::Config(format!(
        "Invalid PROFILE_ROUTE '{}': must start with '/'",
        profile_route
      )));
    }

    let connect_options = match get_env("DATABASE_URL") {
      Some(url) => MySqlConnectOptions::from_str(&url)
        .map_err(|e| AppError::Config(format!("Invalid DATABASE_URL: {}", e)))?,
      None => MySqlConnectOptions::new()
        .host(&get_env("DB_HOST").unwrap_or_else(|| "127.0.0.1".to_string()))
        .port(parse_or("DB_PORT", get_env("DB_PORT"), 3306u16)?)
        .username(&get_env("DB_USER").unwrap_or_else(|| "root".to_string()))
        .password(&lookup("DB_PASSWORD").unwrap_or_default())
        .database(&get_env("DB_NAME").unwrap_or_else(|| "jasaku_db".to_string())),
    };
    let connect_timeout_secs = parse_or("DB_CONNECT_TIMEOUT_SECS", get_env("DB_CONNECT_TIMEOUT_SECS"), 5u64)?;
    if connect_timeout_secs == 0 {
      return Err(AppError::Config("DB_CONNECT_TIMEOUT_SECS must be at least 1".to_string()));
    }

    let allowed_origin = get_env("CORS_ALLOWED_ORIGIN");
    if let Some(origin) = &allowed_origin {
      HeaderValue::from_str(origin)
        .map_err(|e| AppError::Config(format!("Invalid CORS_ALLOWED_ORIGIN '{}': {}", origin, e)))?;
    }

    let status_mode = match get_env("STATUS_CODE_MODE") {
      Some(v) => v.parse::<StatusCodeMode>()?,
      None => StatusCodeMode::default(),
    };
    let expose_db_error_details = parse_or("EXPOSE_DB_ERROR_DETAILS", get_env("EXPOSE_DB_ERROR_DETAILS"), true)?;

    let max_body_bytes = parse_or("MAX_BODY_BYTES", get_env("MAX_BODY_BYTES"), 16_384usize)?;
    let log_format = match get_env("LOG_FORMAT") {
      Some(v) => v.parse::<LogFormat>()?,
      None => LogFormat::default(),
    };

    tracing::info!("Application configuration loaded successfully.");
    // Avoid logging secrets: DatabaseConfig's Debug omits the password.
    tracing::debug!(database = ?connect_options.get_host(), route = %profile_route, "Loaded config details");

    Ok(Self {
      server_host,
      server_port,
      profile_route,
      database: DatabaseConfig {
        connect_options,
        connect_timeout: Duration::from_secs(connect_timeout_secs),
      },
      cors: CorsConfig { allowed_origin },
      response: ResponsePolicy {
        status_mode,
        expose_db_error_details,
      },
      max_body_bytes,
      log_format,
    })
  }
}

fn parse_or<T>(var_name: &str, raw: Option<String>, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match raw {
    Some(v) => v
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e))),
    None => Ok(default),
  }
}
