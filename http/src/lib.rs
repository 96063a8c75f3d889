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

pub mod config;

#[cfg(feature = "reqwest")]
pub mod reqwest;

use http::header::HeaderName;
use http::header::ACCEPT;
use http::header::CONTENT_TYPE;
use http::HeaderMap;
use http::HeaderValue;
use http::StatusCode;
use powervs_core::auth::Authenticator;
use powervs_core::error::ApiError;
use powervs_core::error::Error;
use powervs_core::error::ValidationError;
use powervs_core::headers::sdk_headers;
use powervs_core::operation::Operation;
use powervs_core::params::Params;
use powervs_core::params::RequestOptions;
use powervs_core::retry::retry_after;
use powervs_core::retry::RetryPolicy;
use powervs_core::CallResult;
use powervs_core::DetailedResponse;
use serde::de::DeserializeOwned;
use std::error::Error as StdError;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use tracing::error;
use tracing::warn;
use url::Url;

#[doc(inline)]
pub use config::ServiceProperties;

const APPLICATION_JSON: &str = "application/json";

/// One outgoing HTTP request, fully built.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: http::Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw HTTP response as received by a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl From<HttpResponse> for DetailedResponse {
    fn from(response: HttpResponse) -> Self {
        Self::new(response.status, response.headers, response.body)
    }
}

/// Trait for transport errors that can tell whether resending might help.
pub trait RetryableError {
    /// True for transient failures such as refused connections or timeouts.
    fn is_retryable(&self) -> bool;
}

/// Sends one request and returns whatever the server answered.
///
/// A transport never interprets the status code; non-success responses are
/// returned as `Ok`.
pub trait Transport: Send + Sync {
    type Error: RetryableError + StdError + Send + Sync + 'static;

    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, Self::Error>> + Send;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Error = T::Error;

    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, Self::Error>> + Send {
        (**self).send(request)
    }
}

/// Base URL of a service.
///
/// Resolved operation paths are appended to the base path, so a base URL with
/// a path prefix (e.g. a proxy mount point) keeps it.
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    base_url: Url,
}

impl ServiceEndpoint {
    /// # Errors
    ///
    /// Returns an error unless `base_url` is an absolute `http` or `https` URL.
    pub fn parse(base_url: &str) -> Result<Self, Error> {
        let url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| Error::Config(format!("invalid service URL '{base_url}': {e}")))?;
        Self::try_from(url)
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for already resolved path segments and query pairs.
    ///
    /// Segments are percent-encoded, including any `/` they contain.
    #[must_use]
    pub fn url_for(&self, segments: &[String], query: &[(String, String)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }
}

impl TryFrom<Url> for ServiceEndpoint {
    type Error = Error;

    fn try_from(base_url: Url) -> Result<Self, Error> {
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "service URL must be an absolute http(s) URL: {base_url}"
            )));
        }
        Ok(Self { base_url })
    }
}

impl From<&ServiceEndpoint> for Url {
    fn from(endpoint: &ServiceEndpoint) -> Self {
        endpoint.base_url.clone()
    }
}

/// Generic executor of [`Operation`]s.
///
/// Holds the configuration shared by every call: base URL, authenticator,
/// default headers and the optional retry policy. Calls take `&self`, so one
/// client can be shared between tasks behind an `Arc`. Reconfiguration takes
/// `&mut self` and therefore cannot race with calls in flight.
///
/// # Examples
///
/// ```rust,no_run
/// use powervs_core::auth::BearerTokenAuthenticator;
/// use powervs_core::params::Params;
/// use powervs_http::reqwest::Client;
/// use powervs_http::ServiceClient;
/// # use powervs_core::operation::{Method, Operation, Param};
/// # static TASKS_GET: Operation = Operation {
/// #     id: "PcloudTasksGet", method: Method::Get, path: "/pcloud/v1/tasks/{task_id}",
/// #     params: &[Param::path("task_id")], success: 200, body: false,
/// # };
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let auth = BearerTokenAuthenticator::new("token")?;
/// let mut client = ServiceClient::new(Client::new()?, auth, "https://us-south.power-iaas.cloud.ibm.com")?;
/// client.enable_retries(3, std::time::Duration::from_secs(10));
///
/// let params = Params::new().path("task_id", "1f5c3e");
/// let (task, response) = client.invoke::<serde_json::Value>(&TASKS_GET, &params).await?;
/// println!("{} {}", response.status, task["status"]);
/// # Ok(())
/// # }
/// ```
pub struct ServiceClient<T, A> {
    transport: T,
    authenticator: A,
    endpoint: ServiceEndpoint,
    default_headers: HeaderMap,
    service_name: String,
    service_version: String,
    retry: Option<RetryPolicy>,
}

impl<T: Transport, A: Authenticator> ServiceClient<T, A> {
    /// Client with retries disabled and no default headers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `service_url` is not a usable base URL.
    pub fn new(transport: T, authenticator: A, service_url: &str) -> Result<Self, Error> {
        Ok(Self {
            transport,
            authenticator,
            endpoint: ServiceEndpoint::parse(service_url)?,
            default_headers: HeaderMap::new(),
            service_name: String::new(),
            service_version: String::new(),
            retry: None,
        })
    }

    /// Service identity passed to the SDK header builder.
    #[must_use]
    pub fn with_service(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.service_name = name.into();
        self.service_version = version.into();
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::Config`] if `service_url` is not a usable base URL.
    pub fn set_service_url(&mut self, service_url: &str) -> Result<(), Error> {
        self.endpoint = ServiceEndpoint::parse(service_url)?;
        Ok(())
    }

    /// Headers sent with every request, below the SDK and per-call headers.
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    /// Enable retries with the default retryable status set.
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.retry = Some(RetryPolicy::new(max_retries, max_interval));
    }

    pub fn enable_retries_with(&mut self, policy: RetryPolicy) {
        self.retry = Some(policy);
    }

    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    #[must_use]
    pub const fn service_url(&self) -> &Url {
        self.endpoint.base_url()
    }

    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    #[must_use]
    pub const fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry.as_ref()
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub const fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Execute `op` with typed options.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn invoke_options<O, R>(&self, options: &O) -> CallResult<R>
    where
        O: RequestOptions + Sync,
        R: DeserializeOwned,
    {
        self.invoke(options.operation(), &options.to_params()).await
    }

    /// Execute `op` with `params`.
    ///
    /// Validation happens first and performs no I/O. The request is then sent
    /// and, when retries are enabled, resent after transient transport
    /// failures or retryable statuses until the retry budget is spent.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if `params` do not satisfy `op`;
    /// - [`Error::Auth`] if the authenticator fails;
    /// - [`Error::Network`] if no response was received;
    /// - [`Error::Api`] for a non-success status;
    /// - [`Error::Decode`] if a success body does not decode into `R`.
    pub async fn invoke<R>(&self, op: &Operation, params: &Params) -> CallResult<R>
    where
        R: DeserializeOwned,
    {
        params.validate(op)?;
        let segments = params.resolve_path(op)?;
        let url = self.endpoint.url_for(&segments, params.query_pairs());
        let body = params
            .encode_body(op)?
            .map(|value| serde_json::to_vec(&value))
            .transpose()
            .map_err(|e| ValidationError::InvalidValue {
                name: "body".into(),
                reason: e.to_string(),
            })?;
        let headers = self.request_headers(op, params, body.is_some())?;

        let mut backoff = self.retry.as_ref().map(RetryPolicy::backoff);
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let mut headers = headers.clone();
            self.authenticator.authenticate(&mut headers)?;
            let request = HttpRequest {
                method: op.method.into(),
                url: url.clone(),
                headers,
                body: body.clone(),
            };
            debug!(operation = op.id, attempt, method = %op.method, url = %request.url, "sending request");

            let policy = self
                .retry
                .as_ref()
                .filter(|policy| attempt <= policy.max_retries());

            match self.transport.send(request).await {
                Err(err) => match (policy, backoff.as_mut()) {
                    (Some(policy), Some(backoff)) if err.is_retryable() => {
                        let delay = policy.delay_for(None, backoff);
                        warn!(operation = op.id, attempt, ?delay, error = %err, "transport failure, retrying");
                        tokio::time::sleep(delay).await;
                    }
                    _ => {
                        error!(operation = op.id, attempt, error = %err, "transport failure");
                        return Err(Error::Network(Box::new(err)));
                    }
                },
                Ok(response) => {
                    let response = DetailedResponse::from(response);
                    debug!(operation = op.id, attempt, status = response.status_code(), "received response");
                    if response.status.as_u16() == op.success || response.status.is_success() {
                        return decode(response);
                    }
                    match (policy, backoff.as_mut()) {
                        (Some(policy), Some(backoff))
                            if policy.should_retry_status(response.status) =>
                        {
                            let delay = policy.delay_for(retry_after(&response.headers), backoff);
                            warn!(operation = op.id, attempt, status = response.status_code(), ?delay, "retryable status, retrying");
                            tokio::time::sleep(delay).await;
                        }
                        _ => return Err(Error::Api(ApiError::from_response(response))),
                    }
                }
            }
        }
    }

    fn request_headers(
        &self,
        op: &Operation,
        params: &Params,
        has_body: bool,
    ) -> Result<HeaderMap, ValidationError> {
        let mut headers = self.default_headers.clone();
        sdk_headers(&self.service_name, &self.service_version, op.id).apply(&mut headers);
        for (name, value) in params.headers() {
            let invalid = |reason: String| ValidationError::InvalidValue {
                name: name.clone(),
                reason,
            };
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
            headers.insert(header_name, header_value);
        }
        headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static(APPLICATION_JSON));
        if has_body {
            headers
                .entry(CONTENT_TYPE)
                .or_insert(HeaderValue::from_static(APPLICATION_JSON));
        }
        Ok(headers)
    }
}

/// Decode a success body; an empty body decodes as JSON `null`.
fn decode<R: DeserializeOwned>(response: DetailedResponse) -> CallResult<R> {
    let decoded = if response.is_empty() {
        serde_path_to_error::deserialize(serde_json::Value::Null)
    } else {
        let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
        serde_path_to_error::deserialize(&mut deserializer)
    };
    match decoded {
        Ok(value) => Ok((value, response)),
        Err(source) => Err(Error::Decode { response, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_base_path_and_encodes_segments() {
        let endpoint = ServiceEndpoint::parse("https://proxy.example.com/powervs/").unwrap();
        let url = endpoint.url_for(
            &["pcloud".into(), "v1".into(), "tasks".into(), "a/b c".into()],
            &[("filter".into(), "name eq x&y".into())],
        );
        assert_eq!(
            url.as_str(),
            "https://proxy.example.com/powervs/pcloud/v1/tasks/a%2Fb%20c?filter=name+eq+x%26y"
        );
    }

    #[test]
    fn endpoint_without_path() {
        let endpoint = ServiceEndpoint::parse("http://localhost:8080").unwrap();
        let url = endpoint.url_for(&["broker".into(), "v1".into(), "health".into()], &[]);
        assert_eq!(url.as_str(), "http://localhost:8080/broker/v1/health");
    }

    #[test]
    fn endpoint_rejects_unusable_urls() {
        assert!(matches!(
            ServiceEndpoint::parse("not a url"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ServiceEndpoint::parse("mailto:ops@example.com"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ServiceEndpoint::parse("ftp://example.com"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn empty_body_decodes_as_null() {
        let response = DetailedResponse::new(StatusCode::NO_CONTENT, HeaderMap::new(), Vec::new());
        let (value, response) = decode::<Option<serde_json::Value>>(response).unwrap();
        assert_eq!(value, None);
        assert_eq!(response.status_code(), 204);

        let response = DetailedResponse::new(StatusCode::OK, HeaderMap::new(), Vec::new());
        let ((), _) = decode::<()>(response).unwrap();
    }

    #[test]
    fn decode_error_keeps_envelope_and_path() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Task {
            status: u32,
        }
        let response =
            DetailedResponse::new(StatusCode::OK, HeaderMap::new(), br#"{"status":"done"}"#.to_vec());
        match decode::<Task>(response) {
            Err(Error::Decode { response, source }) => {
                assert_eq!(response.status_code(), 200);
                assert_eq!(source.path().to_string(), "status");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
