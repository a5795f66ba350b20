// src/lib.rs

//! jasaku_profile: user profile lookup for the jasakuapp mobile client.
//!
//! A lookup takes a raw JSON body carrying an `email`, reads the matching
//! `users` row through a [`ProfileStore`], and shapes it into the fixed
//! ten-field [`UserProfile`]. Results are wrapped in an [`Envelope`]:
//!  - `{"success": true, "data": {...}}` when a profile was found.
//!  - `{"success": false, "message": "..."}` for every [`LookupError`].
//!
//! HTTP concerns (status codes, headers, routing) belong to the server crate.

pub mod envelope;
pub mod error;
pub mod lookup;
pub mod profile;
pub mod request;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::envelope::Envelope;
pub use crate::error::{LookupError, LookupResult, StoreError};
pub use crate::lookup::ProfileLookup;
pub use crate::profile::{UserProfile, UserRow, DEFAULT_ROLE};
pub use crate::request::LookupRequest;
pub use crate::store::{MemoryProfileStore, ProfileStore};

#[cfg(feature = "mysql")]
pub use crate::store::MySqlProfileStore;

/*
    Typical wiring:
    1. Build a store: `MySqlProfileStore::new(options, timeout)` in production,
       `MemoryProfileStore::with_rows(..)` in tests.
    2. Wrap it: `ProfileLookup::new(Arc::new(store))`.
    3. Per request: `lookup.lookup_body(&body).await`, then render
       `Envelope::success(profile)` or `Envelope::failure(err.client_message(..))`.
*/
