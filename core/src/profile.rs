// core/src/profile.rs

//! The `users` row as stored, and the profile shape the mobile client expects.

use serde::{Deserialize, Serialize};

/// Role reported when the stored role is NULL.
pub const DEFAULT_ROLE: &str = "customer";

/// A `users` row as read from the store.
///
/// Everything except `id` may be NULL. `is_verified_provider` is read as an
/// integer so that TINYINT(1), BOOLEAN and INT columns all decode the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mysql", derive(sqlx::FromRow))]
pub struct UserRow {
  pub id: i64,
  pub nrp: Option<String>,
  pub nama: Option<String>,
  pub email: Option<String>,
  pub phone: Option<String>,
  pub profile_image: Option<String>,
  pub role: Option<String>,
  pub is_verified_provider: Option<i64>,
  pub provider_since: Option<String>,
  pub provider_description: Option<String>,
}

/// Profile returned under `data` in a successful envelope.
///
/// All ten keys are always serialized; optional ones as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
  pub id: i64,
  pub nrp: String,
  pub nama: String,
  pub email: String,
  pub phone: Option<String>,
  pub profile_image: Option<String>,
  pub role: String,
  pub is_verified_provider: bool,
  pub provider_since: Option<String>,
  pub provider_description: Option<String>,
}

impl UserProfile {
  /// Wire keys, in serialization order.
  pub const FIELDS: [&'static str; 10] = [
    "id",
    "nrp",
    "nama",
    "email",
    "phone",
    "profile_image",
    "role",
    "is_verified_provider",
    "provider_since",
    "provider_description",
  ];
}

impl From<UserRow> for UserProfile {
  fn from(row: UserRow) -> Self {
    UserProfile {
      id: row.id,
      nrp: row.nrp.unwrap_or_default(),
      nama: row.nama.unwrap_or_default(),
      email: row.email.unwrap_or_default(),
      phone: row.phone,
      profile_image: row.profile_image,
      role: row.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
      is_verified_provider: row.is_verified_provider.is_some_and(|flag| flag != 0),
      provider_since: row.provider_since,
      provider_description: row.provider_description,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn null_columns_take_documented_defaults() {
    let profile = UserProfile::from(UserRow { id: 7, ..Default::default() });

    assert_eq!(profile.id, 7);
    assert_eq!(profile.nrp, "");
    assert_eq!(profile.nama, "");
    assert_eq!(profile.email, "");
    assert_eq!(profile.role, DEFAULT_ROLE);
    assert!(!profile.is_verified_provider);
    assert_eq!(profile.phone, None);
    assert_eq!(profile.provider_since, None);
  }

  #[test]
  fn empty_role_is_not_replaced() {
    let profile = UserProfile::from(UserRow {
      id: 1,
      role: Some(String::new()),
      ..Default::default()
    });
    assert_eq!(profile.role, "");
  }

  #[test]
  fn verified_flag_is_truthy_on_any_non_zero_value() {
    for (stored, expected) in [(Some(0), false), (Some(1), true), (Some(-1), true), (Some(42), true), (None, false)] {
      let profile = UserProfile::from(UserRow {
        id: 1,
        is_verified_provider: stored,
        ..Default::default()
      });
      assert_eq!(profile.is_verified_provider, expected, "stored value {:?}", stored);
    }
  }

  #[test]
  fn serializes_all_ten_fields_in_order() {
    let profile = UserProfile::from(UserRow { id: 3, ..Default::default() });
    let json = serde_json::to_value(&profile).unwrap();
    let object = json.as_object().unwrap();

    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    let mut expected = UserProfile::FIELDS.to_vec();
    // serde_json's default map is ordered by key
    expected.sort_unstable();
    let mut sorted_keys = keys.clone();
    sorted_keys.sort_unstable();
    assert_eq!(sorted_keys, expected);
    assert!(object["phone"].is_null());
    assert!(object["profile_image"].is_null());
    assert!(object["provider_description"].is_null());

    let text = serde_json::to_string(&profile).unwrap();
    let positions: Vec<usize> = UserProfile::FIELDS
      .iter()
      .map(|key| text.find(&format!("\"{}\":", key)).unwrap())
      .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "field order: {}", text);
  }
}
