// core/src/store/memory.rs

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::ProfileStore;
use crate::error::StoreError;
use crate::profile::UserRow;

/// In-process `users` table.
///
/// Rows keep insertion order and the first matching row is returned. Emails
/// are compared byte for byte, unlike MySQL, where the column collation
/// decides (`_ci` collations ignore case and trailing spaces). A fault can be
/// injected to make every call fail.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
  rows: RwLock<Vec<UserRow>>,
  fault: RwLock<Option<StoreError>>,
  queries: AtomicUsize,
}

impl MemoryProfileStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_rows(rows: impl IntoIterator<Item = UserRow>) -> Self {
    let store = Self::new();
    store.rows.write().extend(rows);
    store
  }

  pub fn insert(&self, row: UserRow) {
    self.rows.write().push(row);
  }

  /// Makes every subsequent call fail with `fault` (or succeed again with `None`).
  pub fn set_fault(&self, fault: Option<StoreError>) {
    *self.fault.write() = fault;
  }

  /// Number of `find_by_email` calls received so far.
  pub fn query_count(&self) -> usize {
    self.queries.load(Ordering::SeqCst)
  }

  fn check_fault(&self) -> Result<(), StoreError> {
    match self.fault.read().as_ref() {
      Some(fault) => Err(fault.clone()),
      None => Ok(()),
    }
  }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
  async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError> {
    self.queries.fetch_add(1, Ordering::SeqCst);
    self.check_fault()?;

    let rows = self.rows.read();
    Ok(rows.iter().find(|row| row.email.as_deref() == Some(email)).cloned())
  }

  async fn ping(&self) -> Result<(), StoreError> {
    self.check_fault()
  }
}
