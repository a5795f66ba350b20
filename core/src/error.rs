// core/src/error.rs
use thiserror::Error;

/// Failures reported by a [`ProfileStore`](crate::store::ProfileStore).
///
/// The payload is the driver's own description. It is meant for logs and is
/// only shown to clients for connection failures, when the deployment allows it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
  #[error("store connection failed: {0}")]
  Connection(String),

  #[error("statement preparation failed: {0}")]
  Prepare(String),

  #[error("statement execution failed: {0}")]
  Query(String),
}

/// Every way a profile lookup can end without a profile.
///
/// The `Display` output is the client-facing message, including the
/// connection detail. Use [`LookupError::client_message`] when the detail
/// must be withheld.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
  /// Body was not a JSON object with a non-empty string `email`.
  #[error("Missing email field")]
  MissingEmail,

  #[error("User not found")]
  NotFound,

  #[error("DB connection failed: {0}")]
  Connection(String),

  // Driver detail is kept for logging but never rendered.
  #[error("DB prepare failed")]
  Prepare(String),

  #[error("DB query failed")]
  Query(String),
}

impl LookupError {
  /// Message for the response envelope.
  ///
  /// With `expose_details == false` the connection failure collapses to
  /// `"DB connection failed"`; every other variant is unaffected.
  pub fn client_message(&self, expose_details: bool) -> String {
    match self {
      LookupError::Connection(_) if !expose_details => "DB connection failed".to_string(),
      other => other.to_string(),
    }
  }

  /// `true` for failures caused by the store rather than by the request.
  pub fn is_store_failure(&self) -> bool {
    matches!(
      self,
      LookupError::Connection(_) | LookupError::Prepare(_) | LookupError::Query(_)
    )
  }

  /// Driver-level detail, when there is one.
  pub fn detail(&self) -> Option<&str> {
    match self {
      LookupError::Connection(d) | LookupError::Prepare(d) | LookupError::Query(d) => Some(d),
      LookupError::MissingEmail | LookupError::NotFound => None,
    }
  }
}

impl From<StoreError> for LookupError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::Connection(d) => LookupError::Connection(d),
      StoreError::Prepare(d) => LookupError::Prepare(d),
      StoreError::Query(d) => LookupError::Query(d),
    }
  }
}

pub type LookupResult<T, E = LookupError> = std::result::Result<T, E>;
