//! Token service for stateless session tokens.
//!
//! Session tokens are self-contained JWTs signed with a process-wide secret.
//! Nothing is persisted: verification is a signature check plus an expiry
//! check on every protected request.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Session token expiry in seconds, measured from issuance
    pub expiry_seconds: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            expiry_seconds: 7 * 24 * 3600,
            issuer: "campushub".to_string(),
        }
    }
}

impl From<hub_shared::config::JwtConfig> for TokenServiceConfig {
    fn from(config: hub_shared::config::JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            expiry_seconds: config.token_expiry_seconds,
            issuer: config.issuer,
        }
    }
}

/// Service minting and verifying session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service. Key material is derived once from the
    /// configured secret, never per request.
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Mints a session token for a user with the configured expiry offset
    pub fn mint(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, self.config.expiry_seconds, &self.config.issuer);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Verifies a session token and returns its claims
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenServiceConfig {
            jwt_secret: "test-secret".to_string(),
            expiry_seconds: 3600,
            issuer: "campushub".to_string(),
        })
    }

    #[test]
    fn test_mint_and_verify_round_trip() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service.mint(user_id).unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = service().mint(Uuid::new_v4()).unwrap();

        let other = TokenService::new(TokenServiceConfig {
            jwt_secret: "different-secret".to_string(),
            expiry_seconds: 3600,
            issuer: "campushub".to_string(),
        });
        let err = other.verify(&token).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // Well past the default decoding leeway
        let service = TokenService::new(TokenServiceConfig {
            jwt_secret: "test-secret".to_string(),
            expiry_seconds: -120,
            issuer: "campushub".to_string(),
        });
        let token = service.mint(Uuid::new_v4()).unwrap();

        let err = service.verify(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let err = service().verify("not-a-jwt").unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidTokenFormat)
        ));
    }
}
