// core/src/store/mysql.rs

//! MySQL-backed [`ProfileStore`].
//!
//! Every call opens its own connection, prepares the statement, runs it with
//! the email bound as a parameter, and closes the connection again. Early
//! returns drop the connection, which closes the socket.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Executor};
use tracing::{debug, instrument, warn};

use super::ProfileStore;
use crate::error::StoreError;
use crate::profile::UserRow;

/// Single-row lookup by email. Casts make INT UNSIGNED ids, TINYINT/BOOLEAN
/// flags and DATE columns decode into the plain types of [`UserRow`].
pub const SELECT_PROFILE_BY_EMAIL: &str = "SELECT CAST(id AS SIGNED) AS id, nrp, nama, email, phone, profile_image, role, \
   CAST(is_verified_provider AS SIGNED) AS is_verified_provider, \
   CAST(provider_since AS CHAR) AS provider_since, provider_description \
   FROM users WHERE email = ? LIMIT 1";

#[derive(Debug, Clone)]
pub struct MySqlProfileStore {
  options: MySqlConnectOptions,
  connect_timeout: Duration,
}

impl MySqlProfileStore {
  pub fn new(options: MySqlConnectOptions, connect_timeout: Duration) -> Self {
    Self {
      options,
      connect_timeout,
    }
  }

  async fn connect(&self) -> Result<MySqlConnection, StoreError> {
    match tokio::time::timeout(self.connect_timeout, MySqlConnection::connect_with(&self.options)).await {
      Ok(Ok(conn)) => Ok(conn),
      Ok(Err(e)) => {
        debug!(error = %e, "Failed to connect to the database.");
        Err(StoreError::Connection(driver_detail(&e)))
      }
      Err(_) => {
        debug!(timeout_secs = self.connect_timeout.as_secs(), "Timed out connecting to the database.");
        Err(StoreError::Connection(format!(
          "timed out after {}s",
          self.connect_timeout.as_secs()
        )))
      }
    }
  }
}

#[async_trait]
impl ProfileStore for MySqlProfileStore {
  // Failures are logged at error level once, where the response is rendered.
  #[instrument(name = "mysql_store::find_by_email", skip(self, email))]
  async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError> {
    let mut conn = self.connect().await?;

    (&mut conn).prepare(SELECT_PROFILE_BY_EMAIL).await.map_err(|e| {
      debug!(error = %e, "Failed to prepare profile lookup statement.");
      StoreError::Prepare(driver_detail(&e))
    })?;

    let row = sqlx::query_as::<_, UserRow>(SELECT_PROFILE_BY_EMAIL)
      .bind(email)
      .fetch_optional(&mut conn)
      .await
      .map_err(|e| {
        debug!(error = %e, "Profile lookup statement failed.");
        StoreError::Query(driver_detail(&e))
      })?;

    debug!(found = row.is_some(), "Profile lookup statement executed.");
    close_quietly(conn).await;
    Ok(row)
  }

  async fn ping(&self) -> Result<(), StoreError> {
    let mut conn = self.connect().await?;
    conn.ping().await.map_err(|e| {
      warn!(error = %e, "Database ping failed.");
      StoreError::Query(driver_detail(&e))
    })?;
    close_quietly(conn).await;
    Ok(())
  }
}

async fn close_quietly(conn: MySqlConnection) {
  if let Err(e) = conn.close().await {
    warn!(error = %e, "Error while closing database connection.");
  }
}

/// Server message for database errors, the full error text otherwise.
fn driver_detail(err: &sqlx::Error) -> String {
  match err.as_database_error() {
    Some(db_err) => db_err.message().to_string(),
    None => err.to_string(),
  }
}
