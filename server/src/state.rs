// server/src/state.rs
use crate::config::AppConfig;
use jasaku_profile::ProfileLookup;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub lookup: ProfileLookup,
  pub config: Arc<AppConfig>, // Share loaded config
}
