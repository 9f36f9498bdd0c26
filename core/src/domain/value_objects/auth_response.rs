//! Authentication response value object

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::UserSummary;

/// Result of a successful authentication: the public user projection plus a
/// freshly minted session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserSummary,
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: UserSummary, token: String) -> Self {
        Self { user, token }
    }
}
