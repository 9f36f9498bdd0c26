//! Auth service configuration

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost factor used for password hashing. Fixed for the process;
    /// raising it only affects newly stored hashes.
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthServiceConfig {
    /// Lower-cost hashing for tests, where the default cost dominates runtime
    pub fn fast_for_tests() -> Self {
        Self { bcrypt_cost: 4 }
    }
}
