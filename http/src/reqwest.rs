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

use crate::config::ServiceProperties;
use crate::HttpRequest;
use crate::HttpResponse;
use crate::RetryableError;
use crate::Transport;
use std::time::Duration;

#[derive(Debug)]
pub enum TransportError {
    ReqwestError(reqwest::Error),
    InvalidRequest(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(value)
    }
}

impl RetryableError for TransportError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::ReqwestError(e) => e.is_connect() || e.is_timeout() || e.is_request() || e.is_body(),
            Self::InvalidRequest(_) => false,
        }
    }
}

#[allow(clippy::absolute_paths)]
impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReqwestError(e) => write!(f, "HTTP client error: {e:?}"),
            Self::InvalidRequest(r) => write!(f, "invalid request: {r}"),
        }
    }
}

#[allow(clippy::absolute_paths)]
impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReqwestError(e) => Some(e),
            Self::InvalidRequest(_) => None,
        }
    }
}

/// Settings of the reqwest client.
///
/// ```rust
/// use powervs_http::reqwest::ClientParams;
/// use std::time::Duration;
///
/// let params = ClientParams::new()
///     .timeout(Duration::from_secs(30))
///     .accept_invalid_certs(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientParams {
    /// Whole request timeout, `None` for no limit.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Skip TLS certificate verification (`DISABLE_SSL`).
    pub accept_invalid_certs: bool,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(120)),
            connect_timeout: Some(Duration::from_secs(10)),
            accept_invalid_certs: false,
        }
    }
}

impl ClientParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

impl From<&ServiceProperties> for ClientParams {
    fn from(properties: &ServiceProperties) -> Self {
        Self::new().accept_invalid_certs(properties.disable_ssl)
    }
}

/// [`Transport`] implemented with reqwest.
///
/// # Examples
///
/// ```rust,no_run
/// use powervs_core::auth::NoAuthAuthenticator;
/// use powervs_http::reqwest::Client;
/// use powervs_http::reqwest::ClientParams;
/// use powervs_http::ServiceClient;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Create with default settings
/// let client = Client::new()?;
///
/// // Or with custom parameters
/// let params = ClientParams::new().timeout(Duration::from_secs(60));
/// let client = Client::with_params(params)?;
///
/// let service = ServiceClient::new(client, NoAuthAuthenticator, "http://localhost:8080")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

#[allow(clippy::missing_errors_doc)]
#[allow(clippy::absolute_paths)]
impl Client {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_params(ClientParams::default())
    }

    pub fn with_params(params: ClientParams) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(params.accept_invalid_certs);
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = params.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for Client {
    type Error = TransportError;

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let request = builder
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let response = self.client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;

    #[test]
    fn invalid_request_is_not_retryable() {
        let error = TransportError::InvalidRequest("bad header".into());
        assert!(!error.is_retryable());
        assert_eq!(error.to_string(), "invalid request: bad header");
    }

    #[test]
    fn params_follow_disable_ssl() {
        let properties = ServiceProperties {
            disable_ssl: true,
            ..ServiceProperties::default()
        };
        let params = ClientParams::from(&properties);
        assert!(params.accept_invalid_certs);
        assert_eq!(params.timeout, ClientParams::default().timeout);
        assert!(!ClientParams::from(&ServiceProperties::default()).accept_invalid_certs);
        assert!(Client::with_params(params).is_ok());
    }

    #[tokio::test]
    async fn refused_connection_is_retryable() {
        // Port 9 (discard) is closed on test hosts.
        let client = Client::with_params(ClientParams::new().connect_timeout(Duration::from_millis(500)))
            .unwrap();
        let result = client
            .send(HttpRequest {
                method: http::Method::GET,
                url: "http://127.0.0.1:9/".parse().unwrap(),
                headers: HeaderMap::new(),
                body: None,
            })
            .await;
        let error = result.unwrap_err();
        assert!(error.is_retryable());
    }
}
