//! One-time code entity for email-based authentication.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hub_shared::utils::email::normalize_email;

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Seconds a code stays valid after issuance
pub const DEFAULT_TTL_SECONDS: i64 = 600;

/// One-time code issued to an email address.
///
/// At most one live code exists per email: issuance atomically replaces any
/// prior record at the store. A code is consumed on successful verification
/// and must never match past its expiry, reaped or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeCode {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Email address the code was issued to (lowercase)
    pub email: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OneTimeCode {
    /// Creates a new code for an email address with the default TTL
    pub fn new(email: &str) -> Self {
        Self::with_ttl(email, DEFAULT_TTL_SECONDS)
    }

    /// Creates a new code with a custom TTL in seconds
    pub fn with_ttl(email: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Generates a 6-digit code drawn uniformly from [100000, 999999]
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Time remaining until expiry, or zero if lapsed
    pub fn time_until_expiry(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = OneTimeCode::new("Alice@Example.com");
        assert_eq!(code.email, "alice@example.com");
        assert_eq!(code.code.len(), CODE_LENGTH);
        assert!(!code.is_expired());
        assert_eq!(code.expires_at, code.created_at + Duration::seconds(600));
    }

    #[test]
    fn test_generated_code_range() {
        for _ in 0..200 {
            let code = OneTimeCode::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            let num: u32 = code.parse().expect("code is numeric");
            assert!((100_000..=999_999).contains(&num));
            // No leading zeros possible in this range
            assert_ne!(code.as_bytes()[0], b'0');
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: std::collections::HashSet<String> =
            (0..100).map(|_| OneTimeCode::generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let code = OneTimeCode::with_ttl("a@x.com", 0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(code.is_expired());
        assert_eq!(code.time_until_expiry(), Duration::zero());
    }
}
