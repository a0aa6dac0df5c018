//! Identity used for a solved-count query

use std::fmt;
use zeroize::Zeroizing;

/// Username plus the optional cookies LeetCode accepts for authenticated queries
///
/// Tokens are stored in [`Zeroizing`] buffers so they are wiped when the
/// credentials are dropped. Empty or whitespace-only tokens are treated as absent.
///
/// # Example
///
/// ```
/// use lc_http_client::Credentials;
///
/// let credentials = Credentials::new("some_user")
///     .with_session("")
///     .with_csrf_token("abc123");
///
/// assert!(credentials.session().is_none());
/// assert_eq!(credentials.csrf_token(), Some("abc123"));
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    session: Option<Zeroizing<String>>,
    csrf_token: Option<Zeroizing<String>>,
}

impl Credentials {
    /// Create anonymous credentials for a username
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            session: None,
            csrf_token: None,
        }
    }

    /// Attach a `LEETCODE_SESSION` cookie value
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = non_empty_secret(session.into());
        self
    }

    /// Attach a `csrftoken` cookie value (also sent as the `x-csrftoken` header)
    pub fn with_csrf_token(mut self, csrf_token: impl Into<String>) -> Self {
        self.csrf_token = non_empty_secret(csrf_token.into());
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref().map(String::as_str)
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref().map(String::as_str)
    }

    /// True when no token will be sent with the query
    pub fn is_anonymous(&self) -> bool {
        self.session.is_none() && self.csrf_token.is_none()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .field("csrf_token", &self.csrf_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Trim a secret, returning None when nothing is left
fn non_empty_secret(raw: String) -> Option<Zeroizing<String>> {
    let raw = Zeroizing::new(raw);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(Zeroizing::new(trimmed.to_string()))
    }
}
