//! Authentication primitives for the booking backend.
//!
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - Signed, time-limited bearer tokens (HS512 JWT)
//! - An [`Authenticator`] that coordinates both
//!
//! The service crate owns identity lookup and request handling; this crate
//! only knows about secrets, hashes and token strings.
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
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//!
//! let secret = [7u8; 64];
//! let codec = TokenCodec::new(&secret, 3_600_000).unwrap();
//! let token = codec.issue("yoga@studio.com").unwrap();
//! assert!(codec.validate(token.as_str()));
//! assert_eq!(codec.subject_of(&token).unwrap(), "yoga@studio.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let secret = [7u8; 64];
//! let auth = Authenticator::new(&secret, 3_600_000).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! auth.verify_password("password123", Some(&hash)).unwrap();
//! let token = auth.issue_token("yoga@studio.com").unwrap();
//!
//! // Every request: validate, then read the subject
//! assert!(auth.validate_token(token.as_str()));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use password::PasswordError;
pub use password::PasswordHasher;
