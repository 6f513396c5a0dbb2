//! Authentication session state
//!
//! Holds the signed-in user's tokens. Token strings are zeroed when dropped
//! and never appear in Debug or Display output.

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use super::store::StoreState;

/// A token string that zeroes its memory on drop
#[derive(Clone, PartialEq, Eq)]
pub struct SecretToken(Zeroizing<String>);

impl SecretToken {
    /// Wrap a token
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// Get the token contents
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Deref for SecretToken {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for SecretToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SecretToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretToken")
            .field("len", &self.0.len())
            .finish()
    }
}

impl fmt::Display for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.0.len())
    }
}

impl Serialize for SecretToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SecretToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// The persisted session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<SecretToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<SecretToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,

    /// When the access token stops being accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Record a successful sign-in
    pub fn sign_in(
        &mut self,
        user_email: impl Into<String>,
        access_token: SecretToken,
        refresh_token: SecretToken,
        expires_at: Option<DateTime<Utc>>,
    ) {
        self.user_email = Some(user_email.into());
        self.access_token = Some(access_token);
        self.refresh_token = Some(refresh_token);
        self.expires_at = expires_at;
    }

    /// Replace the access token after a refresh
    pub fn refresh(&mut self, access_token: SecretToken, expires_at: Option<DateTime<Utc>>) {
        self.access_token = Some(access_token);
        self.expires_at = expires_at;
    }

    /// Forget everything
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }

    /// Whether a usable access token is held at `now`
    pub fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        match (&self.access_token, self.expires_at) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(expiry)) => expiry > now,
        }
    }

    /// Whether the access token expired but a refresh is still possible
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.access_token.is_some()
            && self.refresh_token.is_some()
            && !self.is_authenticated(now)
    }
}

impl StoreState for SessionState {
    const NAME: &'static str = "session";
}
