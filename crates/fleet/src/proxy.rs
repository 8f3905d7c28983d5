use auth_core::{SignedToken, TokenService, VerifyError};

use crate::drone::{Actuator, FlightEvent};

/// Why a privileged operation was refused. Expired and invalid tokens are
/// kept apart so the caller can react differently: request a fresh token on
/// expiry, escalate on an invalid one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("token has expired, request a fresh one")]
    Expired,
    #[error("token is not valid for this fleet")]
    Unauthorized,
}

impl From<VerifyError> for AccessDenied {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Expired => AccessDenied::Expired,
            VerifyError::Invalid => AccessDenied::Unauthorized,
        }
    }
}

/// Gates every privileged operation of the wrapped actuator behind token
/// verification. The token is re-verified on each call, not once up front,
/// so authorization can never go stale while the proxy is held.
///
/// The actuator is owned by the proxy for its whole lifetime; on a failed
/// verification it is not touched at all.
pub struct DroneProxy<A: Actuator> {
    inner: A,
    verifier: TokenService,
    token: SignedToken,
}

impl<A: Actuator> DroneProxy<A> {
    pub fn new(inner: A, verifier: TokenService, token: SignedToken) -> Self {
        Self {
            inner,
            verifier,
            token,
        }
    }

    /// Replace the presented token. The next operation verifies the new one.
    pub fn present(&mut self, token: SignedToken) {
        self.token = token;
    }

    pub fn take_off(&mut self) -> Result<FlightEvent, AccessDenied> {
        let subject = self.authorize("take_off")?;
        tracing::info!(%subject, "take off authorized");
        Ok(self.inner.take_off())
    }

    pub fn land(&mut self) -> Result<FlightEvent, AccessDenied> {
        let subject = self.authorize("land")?;
        tracing::info!(%subject, "landing authorized");
        Ok(self.inner.land())
    }

    pub fn reposition(
        &mut self,
        lat: f64,
        lon: f64,
        alt: f64,
    ) -> Result<FlightEvent, AccessDenied> {
        let subject = self.authorize("reposition")?;
        tracing::info!(%subject, "reposition authorized");
        Ok(self.inner.reposition(lat, lon, alt))
    }

    /// Hand the actuator back, dropping the gate.
    pub fn into_inner(self) -> A {
        self.inner
    }

    fn authorize(&self, operation: &str) -> Result<String, AccessDenied> {
        match self.verifier.verify(&self.token) {
            Ok(subject) => Ok(subject),
            Err(err) => {
                tracing::warn!(operation, reason = %err, "operation refused");
                Err(err.into())
            }
        }
    }
}
