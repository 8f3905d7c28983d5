/// Why issuance was refused.
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error("subject id must not be empty")]
    InvalidSubject,
}

/// Why a presented token was rejected. Both outcomes are terminal for the
/// attempt; the caller has to request a fresh token, nothing is retried here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// Signature checked out but the validity window is over.
    #[error("token has expired")]
    Expired,
    /// Malformed encoding, tampered payload or a signature made with a
    /// different secret. Deliberately not more specific than that.
    #[error("token is not valid")]
    Invalid,
}
