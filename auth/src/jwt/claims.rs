use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a bearer token.
///
/// Timestamps are Unix seconds, as required by RFC 7519.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the username, an email address in practice)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for `subject`, valid from `issued_at` for `lifetime_ms` milliseconds.
    ///
    /// Both timestamps are truncated to whole seconds, so a token never
    /// outlives `issued_at + lifetime_ms`.
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, lifetime_ms: i64) -> Self {
        let issued_at_ms = issued_at.timestamp_millis();
        let expires_at_ms = issued_at_ms.saturating_add(lifetime_ms);

        Self {
            sub: subject.to_string(),
            iat: issued_at_ms.div_euclid(1000),
            exp: expires_at_ms.div_euclid(1000),
        }
    }

    /// A token is live strictly before its expiry second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
