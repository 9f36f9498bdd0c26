//! MySQL implementation of the one-time-code store.
//!
//! Issuance and verification are each a single statement: the `otp_codes`
//! table keys on email, so `INSERT ... ON DUPLICATE KEY UPDATE` is an atomic
//! replace, and consumption is a `DELETE` that matches code and expiry in
//! the same predicate. Concurrent requests for one email can never observe
//! two live codes or re-match a consumed one.

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::{debug, info};

use hub_core::domain::entities::one_time_code::OneTimeCode;
use hub_core::errors::DomainError;
use hub_core::repositories::OtpRepository;
use hub_shared::utils::email::mask_email;

use super::db_error;

/// MySQL-backed one-time-code store
pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    /// Create a new OTP repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn put(&self, code: &OneTimeCode) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO otp_codes (email, id, code, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                id = VALUES(id),
                code = VALUES(code),
                created_at = VALUES(created_at),
                expires_at = VALUES(expires_at)
        "#;

        sqlx::query(query)
            .bind(&code.email)
            .bind(code.id.to_string())
            .bind(&code.code)
            .bind(code.created_at)
            .bind(code.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to store one-time code", e))?;

        debug!(email = %mask_email(&code.email), "one-time code stored");
        Ok(())
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, DomainError> {
        // Compare-and-delete: an expired record never matches, reaped or not.
        let query = r#"
            DELETE FROM otp_codes
            WHERE email = ? AND code = ? AND expires_at > UTC_TIMESTAMP(3)
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to consume one-time code", e))?;

        let matched = result.rows_affected() > 0;
        debug!(email = %mask_email(email), matched, "one-time code consume attempt");
        Ok(matched)
    }

    async fn reap_expired(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otp_codes WHERE expires_at <= UTC_TIMESTAMP(3)")
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to reap expired one-time codes", e))?;

        let reaped = result.rows_affected();
        if reaped > 0 {
            info!(reaped, "expired one-time codes reaped");
        }
        Ok(reaped)
    }
}
