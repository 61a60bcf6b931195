use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// Deliberately small: the subject it asserts, when it was issued, and when it
/// stops being valid. Nothing else about the session lives in the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the authenticated identity, here a user email)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Build claims for a subject expiring `lifetime` from `issued_at`.
    pub fn for_subject(subject: &str, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: Some(subject.to_string()),
            exp: (issued_at + lifetime).timestamp(),
            iat: Some(issued_at.timestamp()),
        }
    }
}
