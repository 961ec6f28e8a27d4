// SPDX-License-Identifier: MPL-2.0
//! Authentication port definition.
//!
//! The [`Authenticator`] decides who is signed in when the user asks to log
//! in. The shipped adapter
//! ([`DemoAuthenticator`](crate::infrastructure::demo::DemoAuthenticator))
//! accepts every request; a credential-checking adapter can replace it
//! without touching the session store, the route guard or the translation
//! store.

use crate::domain::session::Profile;
use std::fmt;

// =============================================================================
// AuthError
// =============================================================================

/// Errors an authenticator may report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identity provider rejected the request.
    InvalidCredentials,

    /// The identity provider could not be reached.
    Unavailable(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::Unavailable(msg) => write!(f, "Authentication unavailable: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

// =============================================================================
// Authenticator Trait
// =============================================================================

/// Port for establishing a session.
pub trait Authenticator {
    /// Produces the profile of the user being signed in.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the user cannot be signed in.
    fn authenticate(&self) -> Result<Profile, AuthError>;
}
