//! In-memory session credentials.
//!
//! A [`Session`] is a cheap, cloneable handle. Every clone sees the same
//! credentials, so a client and the code that logs a user in or out can share
//! one. The token is read fresh on every request; nothing caches the header.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::ClientError;

/// The state behind a [`Session`].
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    #[default]
    Unauthenticated,
    Authenticated { username: String, token: String },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => f.write_str("Unauthenticated"),
            Self::Authenticated { username, .. } => f
                .debug_struct("Authenticated")
                .field("username", username)
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

/// Shared handle over the current [`Credentials`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Credentials>>,
}

impl Session {
    /// A session with nobody logged in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that already holds a token, e.g. one restored by the caller.
    #[must_use]
    pub fn authenticated(username: impl Into<String>, token: impl Into<String>) -> Self {
        let session = Self::new();
        session.sign_in(username, token);
        session
    }

    /// Replace the credentials.
    pub fn sign_in(&self, username: impl Into<String>, token: impl Into<String>) {
        *self.write() = Credentials::Authenticated {
            username: username.into(),
            token: token.into(),
        };
    }

    /// Swap the token, keeping the username (empty if nobody was logged in).
    pub fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.write();
        let username = match &*guard {
            Credentials::Authenticated { username, .. } => username.clone(),
            Credentials::Unauthenticated => String::new(),
        };
        *guard = Credentials::Authenticated {
            username,
            token: token.into(),
        };
    }

    /// Forget the credentials.
    pub fn clear(&self) {
        *self.write() = Credentials::Unauthenticated;
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(&*self.read(), Credentials::Authenticated { .. })
    }

    #[must_use]
    pub fn username(&self) -> Option<String> {
        match &*self.read() {
            Credentials::Authenticated { username, .. } => Some(username.clone()),
            Credentials::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        match &*self.read() {
            Credentials::Authenticated { token, .. } => Some(token.clone()),
            Credentials::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.read().clone()
    }

    /// `Authorization` header value for the current token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotAuthenticated`] when no token is set.
    pub fn authorization(&self) -> Result<String, ClientError> {
        self.token()
            .map(|token| format!("Token {token}"))
            .ok_or(ClientError::NotAuthenticated)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Credentials> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Credentials> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.credentials(), Credentials::Unauthenticated);
        assert!(matches!(
            session.authorization(),
            Err(ClientError::NotAuthenticated)
        ));
    }

    #[test]
    fn authorization_uses_token_scheme() {
        let session = Session::authenticated("amina", "abc123");
        assert_eq!(session.authorization().unwrap(), "Token abc123");
        assert_eq!(session.username().as_deref(), Some("amina"));
    }

    #[test]
    fn clones_share_state() {
        let session = Session::new();
        let handle = session.clone();
        handle.sign_in("jo", "t1");
        assert!(session.is_logged_in());
        session.clear();
        assert!(!handle.is_logged_in());
        assert_eq!(handle.token(), None);
    }

    #[test]
    fn set_token_keeps_username() {
        let session = Session::authenticated("amina", "old");
        session.set_token("new");
        assert_eq!(session.username().as_deref(), Some("amina"));
        assert_eq!(session.authorization().unwrap(), "Token new");
    }

    #[test]
    fn debug_redacts_token() {
        let session = Session::authenticated("amina", "s3cr3t-token");
        let rendered = format!("{session:?}");
        assert!(rendered.contains("amina"));
        assert!(!rendered.contains("s3cr3t-token"));
    }
}
