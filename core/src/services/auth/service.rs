//! Main authentication service implementation

use std::sync::Arc;

use hub_shared::utils::email::{mask_email, normalize_email};
use tracing::{info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{OtpRepository, UserRepository};
use crate::services::otp::{MailService, OtpService};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Input for account registration. The password arrives in plaintext and is
/// hashed before anything is persisted; it is never logged.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Authentication service orchestrating registration, password login, and
/// the two OTP flows (login and pre-registration signup).
pub struct AuthService<U, O, M>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailService,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// OTP service for code issuance and verification
    otp_service: Arc<OtpService<O, M>>,
    /// Token service for session tokens
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, O, M> AuthService<U, O, M>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailService,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        otp_service: Arc<OtpService<O, M>>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_service,
            token_service,
            config,
        }
    }

    /// Register a new account and sign the user in.
    ///
    /// Fails with `EmailAlreadyRegistered` if the address is taken. The
    /// password is hashed with the configured bcrypt cost before the user is
    /// persisted.
    pub async fn register(&self, account: NewAccount) -> DomainResult<AuthResponse> {
        let email = normalize_email(&account.email);

        if self.user_repository.exists_by_email(&email).await? {
            warn!(email = %mask_email(&email), "registration rejected: email taken");
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = bcrypt::hash(&account.password, self.config.bcrypt_cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {e}")))?;

        let user = User::new(
            account.name,
            &email,
            password_hash,
            account.phone,
            account.latitude,
            account.longitude,
        );
        let created = self.user_repository.create(user).await?;
        info!(email = %mask_email(&created.email), user_id = %created.id, "user registered");

        let token = self.token_service.mint(created.id)?;
        Ok(AuthResponse::new(created.summary(), token))
    }

    /// Password login. Unknown email and wrong password are indistinguishable
    /// to the caller.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self.check_credentials(email, password).await?;
        info!(email = %mask_email(&user.email), user_id = %user.id, "user logged in");

        let token = self.token_service.mint(user.id)?;
        Ok(AuthResponse::new(user.summary(), token))
    }

    /// Re-validate credentials exactly as `login`, then issue a login OTP to
    /// the account's email.
    pub async fn request_login_otp(&self, email: &str, password: &str) -> DomainResult<()> {
        let user = self.check_credentials(email, password).await?;
        self.otp_service.issue(&user.email).await
    }

    /// Verify a login OTP and sign the user in. The code is consumed; a
    /// second verification with the same pair fails.
    pub async fn verify_login_otp(&self, email: &str, code: &str) -> DomainResult<AuthResponse> {
        if !self.otp_service.verify(email, code).await? {
            return Err(AuthError::InvalidOrExpiredCode.into());
        }

        // The account vanishing between issuance and verification should not
        // happen in normal operation, but the window exists.
        let user = self
            .user_repository
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::UserNotFound)?;
        info!(email = %mask_email(&user.email), user_id = %user.id, "user logged in via OTP");

        let token = self.token_service.mint(user.id)?;
        Ok(AuthResponse::new(user.summary(), token))
    }

    /// Issue a signup OTP, gated on the email being unregistered
    pub async fn request_signup_otp(&self, email: &str) -> DomainResult<()> {
        let email = normalize_email(email);
        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }
        self.otp_service.issue(&email).await
    }

    /// Verify a signup OTP. Mints no token: the client follows up with a
    /// register call.
    pub async fn verify_signup_otp(&self, email: &str, code: &str) -> DomainResult<()> {
        if !self.otp_service.verify(email, code).await? {
            return Err(AuthError::InvalidOrExpiredCode.into());
        }
        Ok(())
    }

    /// Load the user and check the password hash. Both failure modes return
    /// the same error so responses cannot enumerate accounts.
    async fn check_credentials(&self, email: &str, password: &str) -> DomainResult<User> {
        let email = normalize_email(email);
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| DomainError::internal(format!("Failed to verify password: {e}")))?;
        if !matches {
            warn!(email = %mask_email(&email), "login rejected: bad credentials");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
