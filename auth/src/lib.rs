//! Authentication building blocks for the user service
//!
//! Provides the pieces a service needs to run a password + bearer-token login
//! flow:
//! - Password hashing and verification (Argon2id, per-call random salt)
//! - Signed, time-limited access tokens (JWT)
//! - An [`Authenticator`] that coordinates both for login
//!
//! Token validity is fully determined by the signature and the expiry claim.
//! There is no server-side session store and no revocation list; a token dies
//! by expiring or by rotating the signing key.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenService;
//! use jsonwebtoken::Algorithm;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Algorithm::HS256, 60);
//! let token = tokens.issue("alice@example.com", None).unwrap();
//! let subject = tokens.verify(&token).unwrap();
//! assert_eq!(subject, "alice@example.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
