use std::time::{Duration, SystemTime};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;

use crate::claims::{Claims, SignedToken};
use crate::error::{IssueError, VerifyError};

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies time-bound operator tokens.
///
/// The shared secret is injected at construction and is the only trust
/// material: whoever holds the same secret can verify (or mint) tokens.
/// The service keeps no other state, so a single instance can be shared
/// freely between threads.
#[derive(Clone)]
pub struct TokenService {
    secret: Secret<String>,
}

impl TokenService {
    pub fn new(secret: Secret<String>) -> Self {
        Self { secret }
    }

    /// Mint a token for `subject_id` valid for `validity` from now.
    pub fn issue(&self, subject_id: &str, validity: Duration) -> Result<SignedToken, IssueError> {
        self.issue_at(subject_id, validity, unix_now())
    }

    /// Same as [`issue`](Self::issue) with an explicit clock, so expiry
    /// behaviour can be exercised without sleeping.
    pub fn issue_at(
        &self,
        subject_id: &str,
        validity: Duration,
        now: u64,
    ) -> Result<SignedToken, IssueError> {
        if subject_id.trim().is_empty() {
            return Err(IssueError::InvalidSubject);
        }

        let claims = Claims {
            sub: subject_id.to_owned(),
            iat: now,
            exp: now.saturating_add(validity.as_secs()),
        };
        let payload = serde_json::to_vec(&claims).expect("claims always serialize to JSON");
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload);

        let mut mac = self.mac();
        mac.update(payload_b64.as_bytes());
        let sig_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        tracing::debug!(subject = %claims.sub, expires_at = claims.exp, "issued token");
        Ok(SignedToken::new(format!("{payload_b64}.{sig_b64}")))
    }

    /// Check a presented token and return the subject id it was issued to.
    pub fn verify(&self, token: &SignedToken) -> Result<String, VerifyError> {
        self.verify_at(token, unix_now())
    }

    /// Same as [`verify`](Self::verify) with an explicit clock.
    ///
    /// The signature is checked before the expiry field is even looked at:
    /// an unsigned or mis-keyed token must not get to pick its own claims.
    pub fn verify_at(&self, token: &SignedToken, now: u64) -> Result<String, VerifyError> {
        let (payload_b64, sig_b64) = token
            .as_str()
            .split_once('.')
            .ok_or(VerifyError::Invalid)?;
        let sig = URL_SAFE_NO_PAD
            .decode(sig_b64)
            .map_err(|_| VerifyError::Invalid)?;

        let mut mac = self.mac();
        mac.update(payload_b64.as_bytes());
        // Constant-time comparison, courtesy of the hmac crate.
        mac.verify_slice(&sig).map_err(|_| VerifyError::Invalid)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| VerifyError::Invalid)?;
        let claims: Claims = serde_json::from_slice(&payload).map_err(|_| VerifyError::Invalid)?;

        if now >= claims.exp {
            tracing::debug!(subject = %claims.sub, "token expired");
            return Err(VerifyError::Expired);
        }
        Ok(claims.sub)
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts keys of any length")
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .expect("system clock is set before the unix epoch")
        .as_secs()
}
