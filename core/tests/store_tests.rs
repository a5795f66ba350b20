// tests/store_tests.rs
mod common;
use common::*;
use jasaku_profile::{MemoryProfileStore, ProfileStore, StoreError};

#[tokio::test]
async fn test_memory_store_finds_by_exact_email() {
  setup_tracing();
  let store = MemoryProfileStore::new();
  assert_eq!(store.find_by_email("alice@example.com").await, Ok(None));

  store.insert(alice_row());
  let found = store.find_by_email("alice@example.com").await.unwrap();
  assert_eq!(found, Some(alice_row()));
  assert_eq!(store.query_count(), 2);
}

#[tokio::test]
async fn test_memory_store_ignores_rows_with_null_email() {
  setup_tracing();
  let mut orphan = sparse_row();
  orphan.email = None;
  let store = MemoryProfileStore::with_rows([orphan]);

  assert_eq!(store.find_by_email("").await, Ok(None));
}

#[tokio::test]
async fn test_memory_store_fault_applies_to_every_call() {
  setup_tracing();
  let store = MemoryProfileStore::with_rows([alice_row()]);
  let fault = StoreError::Connection("Can't connect to MySQL server on '127.0.0.1'".to_string());
  store.set_fault(Some(fault.clone()));

  assert_eq!(store.find_by_email("alice@example.com").await, Err(fault.clone()));
  assert_eq!(store.ping().await, Err(fault));
  // Faulted calls are still counted as queries received
  assert_eq!(store.query_count(), 1);

  store.set_fault(None);
  assert_eq!(store.ping().await, Ok(()));
}
