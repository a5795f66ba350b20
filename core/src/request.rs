// core/src/request.rs

use serde_json::Value;

use crate::error::{LookupError, LookupResult};

/// Body of a profile lookup: `{"email": string}`. Other keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
  pub email: String,
}

impl LookupRequest {
  /// Parses a raw request body.
  ///
  /// Anything other than a JSON object whose `email` is a non-empty string
  /// is reported as [`LookupError::MissingEmail`]: malformed JSON, an empty
  /// body, arrays, `null`, or an `email` that is absent, blank (see
  /// [`is_blank_email`]) or not a string. The address is kept verbatim.
  pub fn from_body(body: &[u8]) -> LookupResult<Self> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
      tracing::debug!(error = %e, "Lookup body is not valid JSON.");
      LookupError::MissingEmail
    })?;

    match value.get("email") {
      Some(Value::String(email)) if !is_blank_email(email) => Ok(LookupRequest { email: email.clone() }),
      _ => Err(LookupError::MissingEmail),
    }
  }
}

/// `""` and `"0"` both count as no email at all.
pub fn is_blank_email(email: &str) -> bool {
  email.is_empty() || email == "0"
}
