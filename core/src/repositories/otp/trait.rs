//! One-time-code store contract.
//!
//! Issuance and verification each touch the store exactly once: `put`
//! replaces atomically, `consume` is a compare-and-delete. Concurrent
//! requests for the same email therefore never observe two live codes, and a
//! consumed code is gone before the caller sees the match.

use async_trait::async_trait;

use crate::domain::entities::one_time_code::OneTimeCode;
use crate::errors::DomainError;

/// Repository contract for one-time codes
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Store a code, atomically replacing any existing record for the same
    /// email. After this call the given code is the only live one for that
    /// address.
    async fn put(&self, code: &OneTimeCode) -> Result<(), DomainError>;

    /// Atomically remove the live record matching `(email, code)`.
    ///
    /// Returns `true` iff a record existed for the exact pair and its TTL
    /// had not lapsed. Expired records never match, whether or not the reap
    /// has removed them yet.
    async fn consume(&self, email: &str, code: &str) -> Result<bool, DomainError>;

    /// Remove TTL-lapsed records. Returns how many were deleted. Lookup
    /// correctness never depends on this; it only bounds storage.
    async fn reap_expired(&self) -> Result<u64, DomainError>;
}
