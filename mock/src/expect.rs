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

//! Expectations for the mock transport.

use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::StatusCode;
use serde::Serialize;

/// Request expected by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedRequest {
    pub method: Method,
    /// Percent-encoded URL path, without query.
    pub path: String,
}

/// Scripted outcome of one attempt.
#[derive(Debug, Clone)]
pub enum Reply {
    /// The server answers.
    Response {
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    },
    /// No response is received.
    NetworkError { reason: String, retryable: bool },
}

impl Reply {
    /// Response with an empty body.
    ///
    /// # Panics
    ///
    /// Panics if `status` is not a valid status code.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::Response {
            status: StatusCode::from_u16(status).expect("valid status code"),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Set a JSON body.
    ///
    /// # Panics
    ///
    /// Panics if `body` is not serializable.
    #[must_use]
    pub fn json(self, body: impl Serialize) -> Self {
        let body = serde_json::to_vec(&body).expect("json serializable");
        self.body(body).header("content-type", "application/json")
    }

    /// Set a raw body.
    #[must_use]
    pub fn body(mut self, value: impl Into<Vec<u8>>) -> Self {
        if let Self::Response { body, .. } = &mut self {
            *body = value.into();
        }
        self
    }

    /// Add a response header.
    ///
    /// # Panics
    ///
    /// Panics if the name or value is not valid header text.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let Self::Response { headers, .. } = &mut self {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes()).expect("valid header name"),
                HeaderValue::from_str(value).expect("valid header value"),
            );
        }
        self
    }

    /// Transient transport failure, e.g. a refused connection.
    #[must_use]
    pub fn network_error() -> Self {
        Self::NetworkError {
            reason: "connection refused".into(),
            retryable: true,
        }
    }

    /// Transport failure that must not be retried.
    #[must_use]
    pub fn fatal_network_error(reason: impl Into<String>) -> Self {
        Self::NetworkError {
            reason: reason.into(),
            retryable: false,
        }
    }
}

/// Expectation for the tests.
#[derive(Debug, Clone)]
pub struct Expect {
    pub request: Option<ExpectedRequest>,
    pub reply: Reply,
}

impl Expect {
    /// Any request gets `reply`.
    #[must_use]
    pub const fn any(reply: Reply) -> Self {
        Self {
            request: None,
            reply,
        }
    }

    /// Only a request with `method` and `path` gets `reply`.
    #[must_use]
    pub fn request(method: Method, path: impl Into<String>, reply: Reply) -> Self {
        Self {
            request: Some(ExpectedRequest {
                method,
                path: path.into(),
            }),
            reply,
        }
    }

    pub fn get(path: impl Into<String>, reply: Reply) -> Self {
        Self::request(Method::GET, path, reply)
    }

    pub fn head(path: impl Into<String>, reply: Reply) -> Self {
        Self::request(Method::HEAD, path, reply)
    }

    pub fn post(path: impl Into<String>, reply: Reply) -> Self {
        Self::request(Method::POST, path, reply)
    }

    pub fn put(path: impl Into<String>, reply: Reply) -> Self {
        Self::request(Method::PUT, path, reply)
    }

    pub fn delete(path: impl Into<String>, reply: Reply) -> Self {
        Self::request(Method::DELETE, path, reply)
    }
}

impl From<Reply> for Expect {
    fn from(reply: Reply) -> Self {
        Self::any(reply)
    }
}
