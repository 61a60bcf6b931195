use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, time-limited access tokens.
///
/// The signing key, algorithm, and default lifetime are fixed at construction
/// and held immutably for the process lifetime. Verification is stateless: a
/// token is valid iff its signature checks out under the configured key and
/// its expiry lies in the future. There is no lookup against any store.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_lifetime: Duration,
}

impl TokenService {
    /// Create a token service from a signing secret.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing key (at least 32 bytes for HS256)
    /// * `algorithm` - Signing algorithm, one of the HMAC family
    /// * `default_lifetime_minutes` - Lifetime applied when `issue` gets none
    pub fn new(secret: &[u8], algorithm: Algorithm, default_lifetime_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            default_lifetime: Duration::minutes(default_lifetime_minutes),
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts (user email)
    /// * `lifetime` - Explicit validity window; the configured default when `None`
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing or serialization failed
    pub fn issue(&self, subject: &str, lifetime: Option<Duration>) -> Result<String, TokenError> {
        let claims = Claims::for_subject(
            subject,
            Utc::now(),
            lifetime.unwrap_or(self.default_lifetime),
        );

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return the subject it asserts.
    ///
    /// Succeeds only when the signature is valid for the configured key and
    /// algorithm, the expiry is in the future (zero leeway), and a non-empty
    /// subject claim is present.
    ///
    /// # Errors
    /// * `Expired` - Expiry timestamp has passed
    /// * `Invalid` - Malformed token, bad signature, or wrong algorithm
    /// * `MissingSubject` - Token decodes but carries no subject
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        token_data
            .claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or(TokenError::MissingSubject)
    }
}
