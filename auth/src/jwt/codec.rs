use chrono::DateTime;
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
use super::errors::JwtError;

/// HS512 needs a key at least as wide as its 512-bit digest.
pub const MIN_SECRET_BYTES: usize = 64;

/// Issues and verifies bearer tokens.
///
/// Tokens are stateless: validity depends only on the token bytes, the
/// shared secret and the current time. Nothing is stored server-side.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime_ms: i64,
}

impl TokenCodec {
    /// Create a codec signing with `secret` and issuing tokens valid for `lifetime_ms`.
    ///
    /// # Errors
    /// * `WeakSecret` - Secret is shorter than [`MIN_SECRET_BYTES`]
    /// * `InvalidLifetime` - Lifetime is zero or negative
    pub fn new(secret: &[u8], lifetime_ms: i64) -> Result<Self, JwtError> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(JwtError::WeakSecret {
                min: MIN_SECRET_BYTES,
                actual: secret.len(),
            });
        }
        if lifetime_ms <= 0 {
            return Err(JwtError::InvalidLifetime(lifetime_ms));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS512,
            lifetime_ms,
        })
    }

    pub fn lifetime_ms(&self) -> i64 {
        self.lifetime_ms
    }

    /// Issue a token for `subject`, valid from now for the configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`.
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, issued_at, self.lifetime_ms);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Fully verify a token and return its claims.
    ///
    /// # Errors
    /// * `Empty` - Token is empty or blank
    /// * `Malformed` - Not three dot-separated segments, or undecodable
    /// * `SignatureMismatch` - Signed with another secret
    /// * `UnsupportedAlgorithm` - Not signed with HS512
    /// * `Expired` - Current time is at or past the expiry
    /// * `MissingSubject` - No usable `sub` claim
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let claims = self.decode_with(token, true)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }

    /// Total check used on every request: never fails, only answers.
    ///
    /// Accepts `&str` or `Option<&str>`; an absent token is simply invalid.
    pub fn validate<'a>(&self, token: impl Into<Option<&'a str>>) -> bool {
        let Some(token) = token.into() else {
            tracing::debug!("No token presented");
            return false;
        };

        match self.decode(token) {
            Ok(_) => true,
            Err(JwtError::Empty) => {
                tracing::debug!("Empty token presented");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token validation failed");
                false
            }
        }
    }

    /// Read the subject of a token that has already passed [`validate`](Self::validate).
    ///
    /// The signature is still checked but expiry is not, so a token that
    /// expires between the two calls still yields its subject.
    pub fn subject_of(&self, token: &str) -> Result<String, JwtError> {
        self.decode_with(token, false).map(|claims| claims.sub)
    }

    fn decode_with(&self, token: &str, validate_exp: bool) -> Result<Claims, JwtError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(JwtError::Empty);
        }

        let segments = token.split('.').count();
        if segments != 3 {
            return Err(JwtError::Malformed(format!(
                "expected 3 segments, got {}",
                segments
            )));
        }

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.validate_exp = validate_exp;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    ErrorKind::InvalidSignature => JwtError::SignatureMismatch,
                    ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                        JwtError::UnsupportedAlgorithm(e.to_string())
                    }
                    ErrorKind::MissingRequiredClaim(claim) if claim == "sub" => {
                        JwtError::MissingSubject
                    }
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        if token_data.claims.sub.is_empty() {
            return Err(JwtError::MissingSubject);
        }

        Ok(token_data.claims)
    }
}
