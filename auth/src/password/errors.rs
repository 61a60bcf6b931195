use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash could not be parsed. This indicates a corrupted
    /// credential record, not a bad password; callers should surface it as a
    /// generic authentication failure.
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}
