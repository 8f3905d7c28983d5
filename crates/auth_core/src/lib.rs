// This module provides the functionality for the Authentication Service (AS).
// The AS is responsible for issuing time-bound tokens to operators and for
// verifying tokens presented back to it. There is no revocation: a token
// stays valid until its expiry timestamp, full stop.

pub mod claims;
pub mod error;
pub mod service;

pub use claims::{Claims, SignedToken};
pub use error::{IssueError, VerifyError};
pub use service::TokenService;
