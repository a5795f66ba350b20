// core/src/lookup.rs

//! The profile lookup flow: parse body, validate, query store, shape profile.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::{LookupError, LookupResult};
use crate::profile::UserProfile;
use crate::request::{is_blank_email, LookupRequest};
use crate::store::ProfileStore;

/// Stateless lookup service. Cheap to clone; the store is shared.
#[derive(Clone)]
pub struct ProfileLookup {
  store: Arc<dyn ProfileStore>,
}

impl std::fmt::Debug for ProfileLookup {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ProfileLookup").finish_non_exhaustive()
  }
}

impl ProfileLookup {
  pub fn new(store: Arc<dyn ProfileStore>) -> Self {
    Self { store }
  }

  /// Runs a lookup for a raw request body.
  ///
  /// The store is not touched when the body does not carry a usable email.
  #[instrument(name = "profile_lookup::lookup", skip(self, body), fields(body_len = body.len()))]
  pub async fn lookup_body(&self, body: &[u8]) -> LookupResult<UserProfile> {
    let request = LookupRequest::from_body(body).inspect_err(|_| {
      warn!("Profile lookup rejected: request has no usable email field.");
    })?;
    self.lookup_email(&request.email).await
  }

  /// Runs a lookup for an already validated address.
  pub async fn lookup_email(&self, email: &str) -> LookupResult<UserProfile> {
    if is_blank_email(email) {
      return Err(LookupError::MissingEmail);
    }

    match self.store.find_by_email(email).await? {
      Some(row) => {
        let profile = UserProfile::from(row);
        info!(user_id = profile.id, "Profile found.");
        Ok(profile)
      }
      None => {
        warn!(%email, "No user found for email.");
        Err(LookupError::NotFound)
      }
    }
  }

  /// Store reachability, for health reporting.
  pub async fn check_store(&self) -> LookupResult<()> {
    self.store.ping().await.map_err(LookupError::from)
  }
}
