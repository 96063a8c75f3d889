// SPDX-FileCopyrightText: Copyright (c) 2025 The powervs-rust-sdk Authors
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Request authentication.
//!
//! An [`Authenticator`] adds credentials to the headers of every attempt.
//! Secrets never appear in `Debug` or `Display` output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::header::AUTHORIZATION;
use http::HeaderMap;
use http::HeaderValue;
use std::error::Error as StdError;
use std::fmt;

pub const AUTH_TYPE_NOAUTH: &str = "noAuth";
pub const AUTH_TYPE_BEARER_TOKEN: &str = "bearerToken";
pub const AUTH_TYPE_BASIC: &str = "basic";

/// Authentication failure. Nothing is sent when one is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authenticator was built with unusable values.
    Invalid(String),
    /// Credential could not be turned into a header value.
    InvalidHeader(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(r) => write!(f, "invalid authenticator: {r}"),
            Self::InvalidHeader(r) => write!(f, "invalid authorization header: {r}"),
        }
    }
}

impl StdError for AuthError {}

/// Source of request credentials.
pub trait Authenticator: Send + Sync {
    /// Add credentials to `headers`.
    ///
    /// # Errors
    ///
    /// Returns an error when credentials cannot be produced.
    fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthError>;

    /// Configuration name of the scheme, e.g. `bearerToken`.
    fn auth_type(&self) -> &'static str;
}

impl<A: Authenticator + ?Sized> Authenticator for Box<A> {
    fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        (**self).authenticate(headers)
    }

    fn auth_type(&self) -> &'static str {
        (**self).auth_type()
    }
}

impl<A: Authenticator + ?Sized> Authenticator for std::sync::Arc<A> {
    fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        (**self).authenticate(headers)
    }

    fn auth_type(&self) -> &'static str {
        (**self).auth_type()
    }
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
    fn authenticate(&self, _headers: &mut HeaderMap) -> Result<(), AuthError> {
        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        AUTH_TYPE_NOAUTH
    }
}

/// Static bearer token.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    /// # Errors
    ///
    /// Returns an error if `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AuthError::Invalid("bearer token must not be empty".into()));
        }
        Ok(Self { token })
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Replace the token, e.g. after an external refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if `token` is empty.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), AuthError> {
        *self = Self::new(token)?;
        Ok(())
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        let mut value = HeaderValue::try_from(format!("Bearer {}", self.token))
            .map_err(|e| AuthError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        AUTH_TYPE_BEARER_TOKEN
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerTokenAuthenticator(token: [REDACTED])")
    }
}

/// HTTP basic authentication.
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    /// # Errors
    ///
    /// Returns an error if either value is empty or the username contains `:`.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, AuthError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::Invalid(
                "username and password must not be empty".into(),
            ));
        }
        if username.contains(':') {
            return Err(AuthError::Invalid("username must not contain ':'".into()));
        }
        Ok(Self { username, password })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Authenticator for BasicAuthenticator {
    fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        let mut value = HeaderValue::try_from(format!("Basic {encoded}"))
            .map_err(|e| AuthError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        AUTH_TYPE_BASIC
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BasicAuthenticator(username: {}, password: [REDACTED])",
            self.username
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_sets_authorization() {
        let auth = BearerTokenAuthenticator::new("abc123").unwrap();
        let mut headers = HeaderMap::new();
        auth.authenticate(&mut headers).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(auth.auth_type(), "bearerToken");
    }

    #[test]
    fn basic_sets_authorization() {
        let auth = BasicAuthenticator::new("admin", "secret").unwrap();
        assert_eq!(auth.username(), "admin");
        let mut headers = HeaderMap::new();
        auth.authenticate(&mut headers).unwrap();
        // base64("admin:secret")
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap(),
            "Basic YWRtaW46c2VjcmV0"
        );
    }

    #[test]
    fn no_auth_leaves_headers_untouched() {
        let mut headers = HeaderMap::new();
        NoAuthAuthenticator.authenticate(&mut headers).unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn empty_secrets_are_rejected() {
        assert!(BearerTokenAuthenticator::new("  ").is_err());
        assert!(BasicAuthenticator::new("", "x").is_err());
        assert!(BasicAuthenticator::new("a:b", "x").is_err());
    }

    #[test]
    fn secrets_are_redacted() {
        let bearer = BearerTokenAuthenticator::new("topsecret").unwrap();
        assert!(!format!("{bearer:?}").contains("topsecret"));
        assert!(!bearer.to_string().contains("topsecret"));

        let basic = BasicAuthenticator::new("admin", "hunter2").unwrap();
        assert!(!format!("{basic:?}").contains("hunter2"));
        assert_eq!(
            basic.to_string(),
            "BasicAuthenticator(username: admin, password: [REDACTED])"
        );
    }
}
