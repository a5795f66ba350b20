// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every fixture

use jasaku_profile::{MemoryProfileStore, ProfileLookup, UserRow};
use std::sync::Arc;
use tracing::Level;

// --- Fixtures ---
pub fn alice_row() -> UserRow {
  UserRow {
    id: 1,
    nrp: Some("R1".to_string()),
    nama: Some("Alice".to_string()),
    email: Some("alice@example.com".to_string()),
    phone: None,
    profile_image: None,
    role: Some("provider".to_string()),
    is_verified_provider: Some(1),
    provider_since: Some("2023-01-01".to_string()),
    provider_description: Some("Plumbing".to_string()),
  }
}

pub fn full_row() -> UserRow {
  UserRow {
    id: 42,
    nrp: Some("5025201042".to_string()),
    nama: Some("Budi Santoso".to_string()),
    email: Some("budi@example.com".to_string()),
    phone: Some("+62 812 0000 1111".to_string()),
    profile_image: Some("uploads/profile/42.jpg".to_string()),
    role: Some("customer".to_string()),
    is_verified_provider: Some(0),
    provider_since: Some("2024-06-30".to_string()),
    provider_description: Some("AC repair, \"same day\" service".to_string()),
  }
}

/// Row with every nullable column left NULL.
pub fn sparse_row() -> UserRow {
  UserRow {
    id: 9,
    email: Some("sparse@example.com".to_string()),
    ..Default::default()
  }
}

pub fn seeded_store() -> Arc<MemoryProfileStore> {
  Arc::new(MemoryProfileStore::with_rows([alice_row(), full_row(), sparse_row()]))
}

pub fn lookup_over(store: &Arc<MemoryProfileStore>) -> ProfileLookup {
  ProfileLookup::new(store.clone())
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
