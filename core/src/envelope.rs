// core/src/envelope.rs

use serde::{Deserialize, Serialize};

/// `{success, data|message}` wrapper used for every lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl<T> Envelope<T> {
  pub fn success(data: T) -> Self {
    Envelope {
      success: true,
      data: Some(data),
      message: None,
    }
  }

  pub fn failure(message: impl Into<String>) -> Self {
    Envelope {
      success: false,
      data: None,
      message: Some(message.into()),
    }
  }
}
