//! Session token claims.
//!
//! Session tokens are stateless JWTs: nothing is persisted, every protected
//! request is checked by signature and expiry alone.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id
    pub sub: String,

    /// Issued-at, seconds since epoch
    pub iat: i64,

    /// Expiry, seconds since epoch
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for a user with a fixed expiry offset from now
    pub fn new(user_id: Uuid, expiry_seconds: i64, issuer: &str) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            iat: now,
            exp: now + expiry_seconds,
            iss: issuer.to_string(),
        }
    }

    /// Parses the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Checks expiry against the current time
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_round_trip_user_id() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, 3600, "campushub");
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new(Uuid::new_v4(), -1, "campushub");
        assert!(claims.is_expired());
    }
}
