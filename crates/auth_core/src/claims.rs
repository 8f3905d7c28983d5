use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload of an issued token: who it was issued to and for how long.
///
/// Timestamps are unix seconds. The validity window is fixed at issuance;
/// the claims are immutable once signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Opaque id of the principal the token was issued to.
    pub sub: String,
    /// Issued-at (unix seconds).
    pub iat: u64,
    /// Expires-at (unix seconds). The token is rejected once the current
    /// time reaches this value.
    pub exp: u64,
}

/// An issued token in its transport form: `payload.signature`, both segments
/// base64url without padding. Opaque to callers; only the issuing
/// `TokenService` (or a verifier sharing its secret) can make sense of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken(String);

impl SignedToken {
    pub(crate) fn new(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// Tokens arrive over the wire as plain strings.
impl From<String> for SignedToken {
    fn from(encoded: String) -> Self {
        Self(encoded)
    }
}

impl fmt::Display for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
