// ABOUTME: Default login material an image is configured to accept.
// ABOUTME: Secrets are serialized for caches but redacted from Debug output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Login credentials for the default user of an image.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
    #[serde(default)]
    authenticate_sudo: bool,
}

impl LoginCredentials {
    pub fn builder(user: impl Into<String>) -> LoginCredentialsBuilder {
        LoginCredentialsBuilder {
            inner: LoginCredentials {
                user: user.into(),
                password: None,
                private_key: None,
                authenticate_sudo: false,
            },
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    /// Whether `sudo` on this image asks for the user's password.
    pub fn should_authenticate_sudo(&self) -> bool {
        self.authenticate_sudo
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("authenticate_sudo", &self.authenticate_sudo)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct LoginCredentialsBuilder {
    inner: LoginCredentials,
}

impl LoginCredentialsBuilder {
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.inner.password = Some(password.into());
        self
    }

    pub fn private_key(mut self, private_key: impl Into<String>) -> Self {
        self.inner.private_key = Some(private_key.into());
        self
    }

    pub fn authenticate_sudo(mut self, authenticate_sudo: bool) -> Self {
        self.inner.authenticate_sudo = authenticate_sudo;
        self
    }

    pub fn build(self) -> LoginCredentials {
        self.inner
    }
}
