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

//! Configuration file of the command-line client.
//!
//! Values found in the file override the credentials file and environment
//! of the service; command-line flags override both.
//!
//! ```toml
//! url = "https://us-south.power-iaas.cloud.ibm.com"
//! auth_type = "bearerToken"
//! bearer_token = "eyJraWQiOi..."
//!
//! [retries]
//! max_retries = 3
//! max_interval_secs = 20
//! ```

use crate::Error;
use powervs_http::config::AuthType;
use powervs_http::config::ServiceProperties;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Content of the configuration file.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    pub url: Option<String>,
    /// `noAuth`, `bearerToken` or `basic`.
    pub auth_type: Option<String>,
    pub bearer_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub disable_ssl: Option<bool>,
    pub retries: Option<RetriesConfig>,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RetriesConfig {
    pub max_retries: Option<u32>,
    pub max_interval_secs: Option<u64>,
}

impl CliConfig {
    /// Read configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - `Error::ReadConfig` if the file cannot be read
    /// - `Error::Toml` if the content is not a valid configuration
    pub fn read(path: &Path) -> Result<Self, Error> {
        let content =
            fs::read_to_string(path).map_err(|e| Error::ReadConfig(path.to_path_buf(), e))?;
        toml::from_str(&content).map_err(|e| Error::Toml(path.to_path_buf(), e))
    }

    /// Apply the values set in the file on top of `properties`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported `auth_type`.
    pub fn apply(&self, mut properties: ServiceProperties) -> Result<ServiceProperties, Error> {
        if let Some(url) = &self.url {
            properties.url = Some(url.clone());
        }
        if let Some(auth_type) = &self.auth_type {
            properties.auth_type = Some(auth_type.parse::<AuthType>()?);
        }
        if let Some(token) = &self.bearer_token {
            properties.bearer_token = Some(token.clone());
        }
        if let Some(username) = &self.username {
            properties.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            properties.password = Some(password.clone());
        }
        if let Some(disable_ssl) = self.disable_ssl {
            properties.disable_ssl = disable_ssl;
        }
        if let Some(retries) = &self.retries {
            properties.enable_retries = true;
            properties.max_retries = retries.max_retries.or(properties.max_retries);
            properties.retry_interval = retries
                .max_interval_secs
                .map(Duration::from_secs)
                .or(properties.retry_interval);
        }
        Ok(properties)
    }
}

/// Values given on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub url: Option<String>,
    pub max_retries: Option<u32>,
    pub retry_interval: Option<Duration>,
}

impl Overrides {
    #[must_use]
    pub fn apply(&self, mut properties: ServiceProperties) -> ServiceProperties {
        if let Some(url) = &self.url {
            properties.url = Some(url.clone());
        }
        if self.max_retries.is_some() || self.retry_interval.is_some() {
            properties.enable_retries = true;
            properties.max_retries = self.max_retries.or(properties.max_retries);
            properties.retry_interval = self.retry_interval.or(properties.retry_interval);
        }
        properties
    }
}

/// Effective properties of `service_name`: external configuration, then the
/// configuration file, then command-line flags.
///
/// # Errors
///
/// Returns an error if any source cannot be read or holds invalid values.
pub fn resolve(
    service_name: &str,
    config_file: Option<&Path>,
    overrides: &Overrides,
) -> Result<ServiceProperties, Error> {
    let mut properties = ServiceProperties::load(service_name)?;
    if let Some(path) = config_file {
        properties = CliConfig::read(path)?.apply(properties)?;
    }
    Ok(overrides.apply(properties))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_values_override_external_ones() {
        let config: CliConfig = toml::from_str(
            r#"
            url = "https://eu-de.power-iaas.cloud.ibm.com"
            auth_type = "basic"
            username = "admin"
            password = "secret"

            [retries]
            max_retries = 2
            "#,
        )
        .unwrap();

        let external = ServiceProperties {
            url: Some("https://us-south.power-iaas.cloud.ibm.com".into()),
            retry_interval: Some(Duration::from_secs(5)),
            ..ServiceProperties::default()
        };
        let properties = config.apply(external).unwrap();

        assert_eq!(
            properties.url.as_deref(),
            Some("https://eu-de.power-iaas.cloud.ibm.com")
        );
        assert_eq!(properties.auth_type, Some(AuthType::Basic));
        let policy = properties.retry_policy().unwrap();
        assert_eq!(policy.max_retries(), 2);
        assert_eq!(policy.max_interval(), Duration::from_secs(5));
    }

    #[test]
    fn unknown_keys_and_auth_types_are_rejected() {
        assert!(toml::from_str::<CliConfig>("region = \"us-south\"").is_err());

        let config = CliConfig {
            auth_type: Some("iam".into()),
            ..CliConfig::default()
        };
        assert!(matches!(
            config.apply(ServiceProperties::default()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn flags_win() {
        let overrides = Overrides {
            url: Some("http://localhost:8080".into()),
            max_retries: Some(1),
            retry_interval: None,
        };
        let properties = overrides.apply(ServiceProperties {
            url: Some("https://power-iaas.cloud.ibm.com".into()),
            ..ServiceProperties::default()
        });
        assert_eq!(properties.url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(properties.retry_policy().unwrap().max_retries(), 1);

        let untouched = Overrides::default().apply(ServiceProperties::default());
        assert!(untouched.retry_policy().is_none());
    }
}
