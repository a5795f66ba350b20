// core/src/store/mod.rs

//! Read access to the `users` table.
//!
//! The lookup service only sees [`ProfileStore`]. The MySQL implementation
//! opens one connection per call; the memory implementation backs tests and
//! benchmarks.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::profile::UserRow;

pub mod memory;
#[cfg(feature = "mysql")]
pub mod mysql;

pub use memory::MemoryProfileStore;
#[cfg(feature = "mysql")]
pub use mysql::MySqlProfileStore;

#[async_trait]
pub trait ProfileStore: Send + Sync {
  /// Equality lookup on `email`, as the backend compares strings. Returns the
  /// first matching row, if any.
  async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError>;

  /// Checks that the store can be reached.
  async fn ping(&self) -> Result<(), StoreError>;
}
