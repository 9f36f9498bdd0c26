//! User entity representing a registered CampusHub account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hub_shared::utils::email::normalize_email;

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, stored lowercase; unique across the system
    pub email: String,

    /// Salted one-way hash of the password. Never serialized.
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Optional contact phone number
    pub phone: Option<String>,

    /// Optional location latitude, in [-90, 90]
    pub latitude: Option<f64>,

    /// Optional location longitude, in [-180, 180]
    pub longitude: Option<f64>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a user: what auth responses and populated
/// creator/owner references expose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a new User. The email is normalized to lowercase; the caller
    /// supplies an already-hashed password.
    pub fn new(
        name: String,
        email: &str,
        password_hash: String,
        phone: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email: normalize_email(email),
            password_hash,
            phone,
            latitude,
            longitude,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public projection used in auth responses and owner references
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// Apply a profile update from the allow-listed fields
    pub fn apply_profile_update(&mut self, name: Option<String>, email: Option<&str>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = normalize_email(email);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "Alice".to_string(),
            "Alice@Example.com",
            "$2b$12$hash".to_string(),
            Some("555-0100".to_string()),
            Some(-33.86),
            Some(151.2),
        )
    }

    #[test]
    fn test_email_normalized_on_creation() {
        let user = sample_user();
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "alice@example.com");
    }

    #[test]
    fn test_summary_projection() {
        let user = sample_user();
        let summary = user.summary();
        assert_eq!(summary.id, user.id);
        assert_eq!(summary.name, "Alice");
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_profile_update_allow_list() {
        let mut user = sample_user();
        user.apply_profile_update(Some("Alicia".to_string()), Some("NEW@Example.com"));
        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "new@example.com");

        // None leaves fields untouched
        user.apply_profile_update(None, None);
        assert_eq!(user.name, "Alicia");
    }
}
