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

//! External service configuration.
//!
//! Properties are looked up for a service name, e.g. `powervs`, whose
//! upper-cased form prefixes every key (`POWERVS_URL`, `POWERVS_AUTH_TYPE`,
//! ...). Sources are tried in order and the first one that defines any key
//! for the service wins:
//!
//! 1. credentials file: `$IBM_CREDENTIALS_FILE`, else `./ibm-credentials.env`,
//!    else `$HOME/ibm-credentials.env`;
//! 2. process environment.
//!
//! ```text
//! # ibm-credentials.env
//! POWERVS_URL=https://us-south.power-iaas.cloud.ibm.com
//! POWERVS_AUTH_TYPE=bearerToken
//! POWERVS_BEARER_TOKEN=eyJraWQiOi...
//! POWERVS_ENABLE_RETRIES=true
//! POWERVS_MAX_RETRIES=3
//! POWERVS_RETRY_INTERVAL=20
//! ```

use powervs_core::auth::AuthError;
use powervs_core::auth::Authenticator;
use powervs_core::auth::BasicAuthenticator;
use powervs_core::auth::BearerTokenAuthenticator;
use powervs_core::auth::NoAuthAuthenticator;
use powervs_core::retry::RetryPolicy;
use powervs_core::retry::DEFAULT_MAX_INTERVAL;
use powervs_core::retry::DEFAULT_MAX_RETRIES;
use std::collections::HashMap;
use std::env;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Environment variable naming an explicit credentials file.
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";
/// File name searched in the working and home directories.
pub const DEFAULT_CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    InvalidValue { key: String, value: String },
    UnsupportedAuthType(String),
    MissingProperty(String),
    Auth(AuthError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::InvalidValue { key, value } => write!(f, "invalid value for {key}: '{value}'"),
            Self::UnsupportedAuthType(t) => write!(f, "unsupported authentication type: {t}"),
            Self::MissingProperty(key) => write!(f, "missing configuration property {key}"),
            Self::Auth(e) => write!(f, "{e}"),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Auth(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AuthError> for ConfigError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<ConfigError> for powervs_core::Error {
    fn from(value: ConfigError) -> Self {
        Self::Config(value.to_string())
    }
}

/// Authentication scheme named by `<PREFIX>_AUTH_TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    NoAuth,
    BearerToken,
    Basic,
}

impl AuthType {
    fn parse(key: &str, value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "noauth" => Ok(Self::NoAuth),
            "bearertoken" => Ok(Self::BearerToken),
            "basic" => Ok(Self::Basic),
            "" => Err(ConfigError::InvalidValue {
                key: key.to_owned(),
                value: value.to_owned(),
            }),
            _ => Err(ConfigError::UnsupportedAuthType(value.to_owned())),
        }
    }
}

impl FromStr for AuthType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("AUTH_TYPE", s)
    }
}

/// Properties configured for one service.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ServiceProperties {
    pub url: Option<String>,
    pub auth_type: Option<AuthType>,
    pub bearer_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub disable_ssl: bool,
    pub enable_retries: bool,
    pub max_retries: Option<u32>,
    pub retry_interval: Option<Duration>,
}

impl fmt::Debug for ServiceProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("ServiceProperties")
            .field("url", &self.url)
            .field("auth_type", &self.auth_type)
            .field("bearer_token", &redact(&self.bearer_token))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("disable_ssl", &self.disable_ssl)
            .field("enable_retries", &self.enable_retries)
            .field("max_retries", &self.max_retries)
            .field("retry_interval", &self.retry_interval)
            .finish()
    }
}

impl ServiceProperties {
    /// Look the service up in the credentials file, then in the environment.
    ///
    /// Returns empty properties when neither source mentions the service.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named credentials file cannot be
    /// read or a property has an invalid value.
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        if let Some(path) = credentials_file()? {
            let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            if let Some(props) = Self::from_pairs(service_name, parse_credentials(&contents))? {
                debug!(service = service_name, path = %path.display(), "loaded credentials file");
                return Ok(props);
            }
        }
        if let Some(props) = Self::from_pairs(service_name, env_pairs())? {
            debug!(service = service_name, "loaded environment");
            return Ok(props);
        }
        Ok(Self::default())
    }

    /// Properties for `service_name` from `KEY=value` pairs.
    ///
    /// Returns `None` if no key carries the service prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if a property has an invalid value.
    pub fn from_pairs<I, K, V>(service_name: &str, pairs: I) -> Result<Option<Self>, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let prefix = format!("{}_", prefix(service_name));
        let found: HashMap<String, String> = pairs
            .into_iter()
            .filter_map(|(k, v)| {
                k.as_ref()
                    .strip_prefix(&prefix)
                    .map(|key| (key.to_owned(), v.into()))
            })
            .collect();
        if found.is_empty() {
            return Ok(None);
        }

        let full_key = |key: &str| format!("{prefix}{key}");
        let text = |key: &str| {
            found
                .get(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let flag = |key: &str| -> Result<bool, ConfigError> {
            text(key).map_or(Ok(false), |v| parse_bool(&full_key(key), &v))
        };
        let number = |key: &str| -> Result<Option<u64>, ConfigError> {
            text(key)
                .map(|v| {
                    v.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                        key: full_key(key),
                        value: v.clone(),
                    })
                })
                .transpose()
        };

        let max_retries = number("MAX_RETRIES")?
            .map(|n| {
                u32::try_from(n).map_err(|_| ConfigError::InvalidValue {
                    key: full_key("MAX_RETRIES"),
                    value: n.to_string(),
                })
            })
            .transpose()?;

        Ok(Some(Self {
            url: text("URL"),
            auth_type: text("AUTH_TYPE")
                .map(|v| AuthType::parse(&full_key("AUTH_TYPE"), &v))
                .transpose()?,
            bearer_token: text("BEARER_TOKEN"),
            username: text("USERNAME"),
            password: text("PASSWORD"),
            disable_ssl: flag("DISABLE_SSL")?,
            enable_retries: flag("ENABLE_RETRIES")?,
            max_retries,
            retry_interval: number("RETRY_INTERVAL")?.map(Duration::from_secs),
        }))
    }

    /// Effective authentication type.
    ///
    /// Without an explicit `AUTH_TYPE`, a bearer token selects `bearerToken`,
    /// a username selects `basic`, and otherwise requests are unauthenticated.
    #[must_use]
    pub fn effective_auth_type(&self) -> AuthType {
        match (self.auth_type, &self.bearer_token, &self.username) {
            (Some(t), _, _) => t,
            (None, Some(_), _) => AuthType::BearerToken,
            (None, None, Some(_)) => AuthType::Basic,
            (None, None, None) => AuthType::NoAuth,
        }
    }

    /// Build the configured authenticator.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials for the selected type are missing.
    pub fn authenticator(&self) -> Result<Box<dyn Authenticator>, ConfigError> {
        Ok(match self.effective_auth_type() {
            AuthType::NoAuth => Box::new(NoAuthAuthenticator),
            AuthType::BearerToken => {
                let token = self
                    .bearer_token
                    .clone()
                    .ok_or_else(|| ConfigError::MissingProperty("BEARER_TOKEN".into()))?;
                Box::new(BearerTokenAuthenticator::new(token)?)
            }
            AuthType::Basic => {
                let username = self
                    .username
                    .clone()
                    .ok_or_else(|| ConfigError::MissingProperty("USERNAME".into()))?;
                let password = self
                    .password
                    .clone()
                    .ok_or_else(|| ConfigError::MissingProperty("PASSWORD".into()))?;
                Box::new(BasicAuthenticator::new(username, password)?)
            }
        })
    }

    /// Retry policy, if retries are enabled.
    #[must_use]
    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.enable_retries.then(|| {
            RetryPolicy::new(
                self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
                self.retry_interval.unwrap_or(DEFAULT_MAX_INTERVAL),
            )
        })
    }
}

/// Key prefix for a service name: upper case, `-` replaced with `_`.
#[must_use]
pub fn prefix(service_name: &str) -> String {
    service_name.to_ascii_uppercase().replace('-', "_")
}

/// Parse `KEY=value` lines. Blank lines and `#` comments are skipped.
#[must_use]
pub fn parse_credentials(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
        .collect()
}

/// Environment variables whose name and value are valid UTF-8.
fn env_pairs() -> impl Iterator<Item = (String, String)> {
    env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
}

fn credentials_file() -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = env::var_os(CREDENTIALS_FILE_ENV).filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return Err(ConfigError::Io {
                path,
                source: io::Error::new(io::ErrorKind::NotFound, "credentials file not found"),
            });
        }
        return Ok(Some(path));
    }
    let cwd = Path::new(DEFAULT_CREDENTIALS_FILE_NAME);
    if cwd.is_file() {
        return Ok(Some(cwd.to_path_buf()));
    }
    Ok(env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(DEFAULT_CREDENTIALS_FILE_NAME))
        .filter(|path| path.is_file()))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}
