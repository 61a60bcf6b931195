use chrono::Duration;
use jsonwebtoken::Algorithm;
use thiserror::Error;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenError;
use crate::token::TokenService;

/// Coordinates password verification and token issuance for login.
///
/// Built once at startup from the process configuration and shared across
/// requests; everything inside is read-only after construction.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    tokens: TokenService,
    // Hash verified when a login names an unknown account, so the rejected
    // path pays the same Argon2 cost as a real mismatch.
    dummy_hash: String,
}

/// Result of a successful login.
pub struct AuthenticationResult {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Authentication operation errors.
///
/// A wrong password and a corrupted stored hash both come out as
/// `InvalidCredentials`; the distinction must not reach the caller.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create an authenticator.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing key for access tokens
    /// * `algorithm` - Token signing algorithm
    /// * `default_lifetime_minutes` - Access token lifetime
    ///
    /// # Errors
    /// * `PasswordError` - Computing the dummy hash failed
    pub fn new(
        secret: &[u8],
        algorithm: Algorithm,
        default_lifetime_minutes: i64,
    ) -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::new();
        let dummy_hash = password_hasher.hash("")?;

        Ok(Self {
            password_hasher,
            tokens: TokenService::new(secret, algorithm, default_lifetime_minutes),
            dummy_hash,
        })
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password presented at login
    /// * `stored_hash` - PHC hash from the user record
    /// * `subject` - Identity the token will assert (user email)
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password mismatch, or the stored hash is unreadable
    /// * `Token` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self
            .password_hasher
            .verify(password, stored_hash)
            .map_err(|_| AuthenticationError::InvalidCredentials)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(subject, None)?;

        Ok(AuthenticationResult {
            access_token,
            token_type: "bearer",
        })
    }

    /// Burn a verification against the dummy hash.
    ///
    /// Called when a login names an email with no account, before answering
    /// with the same rejection a wrong password gets.
    pub fn dummy_verify(&self, password: &str) {
        let _ = self.password_hasher.verify(password, &self.dummy_hash);
    }

    /// Verify an access token and return the subject it asserts.
    ///
    /// # Errors
    /// * `TokenError` - Any of: bad signature, malformed, expired, no subject
    pub fn verify_token(&self, token: &str) -> Result<String, TokenError> {
        self.tokens.verify(token)
    }

    /// Issue a token directly, bypassing password verification.
    ///
    /// Used by tests that need tokens with arbitrary lifetimes.
    pub fn issue_token(
        &self,
        subject: &str,
        lifetime: Option<Duration>,
    ) -> Result<String, TokenError> {
        self.tokens.issue(subject, lifetime)
    }
}
