use thiserror::Error;

/// Error type for token operations.
///
/// Everything past `EncodingFailed` describes why a presented token was
/// rejected. `TokenCodec::validate` folds all of them into `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Signing secret too short: minimum {min} bytes, got {actual}")]
    WeakSecret { min: usize, actual: usize },

    #[error("Token lifetime must be positive, got {0} ms")]
    InvalidLifetime(i64),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is empty")]
    Empty,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature does not match")]
    SignatureMismatch,

    #[error("Token algorithm is not supported: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token has no subject")]
    MissingSubject,
}
