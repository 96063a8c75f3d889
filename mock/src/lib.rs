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

pub mod expect;

#[doc(inline)]
pub use expect::Expect;
pub use expect::ExpectedRequest;
pub use expect::Reply;

use powervs_http::HttpRequest;
use powervs_http::HttpResponse;
use powervs_http::RetryableError;
use powervs_http::Transport;
use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Mutex;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum Error {
    MutexLock(String),
    NothingIsExpected,
    Network { reason: String, retryable: bool },
    UnexpectedRequest(http::Method, String, ExpectedRequest),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::MutexLock(err) => write!(f, "lock error: {err}"),
            Self::NothingIsExpected => {
                write!(f, "nothing is expected to happen but something happened")
            }
            Self::Network { reason, .. } => write!(f, "network error: {reason}"),
            Self::UnexpectedRequest(method, path, expected) => {
                write!(f, "unexpected request: {method} {path}; expected: {expected:?}")
            }
        }
    }
}

impl StdError for Error {}

impl RetryableError for Error {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { retryable: true, .. })
    }
}

impl Error {
    pub fn mutex_lock<T>(err: PoisonError<T>) -> Self {
        Self::MutexLock(err.to_string())
    }
}

#[derive(Default)]
struct State {
    expect: VecDeque<Expect>,
    requests: Vec<HttpRequest>,
}

/// Transport answering from a FIFO of scripted replies.
///
/// Every request is recorded, whether or not it matched an expectation.
/// Share it with the client under test through an `Arc` to inspect it after
/// the call.
#[derive(Default)]
pub struct MockTransport {
    state: Mutex<State>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport answering with `replies` in order.
    #[must_use]
    pub fn with_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        let transport = Self::new();
        for reply in replies {
            transport.push(reply);
        }
        transport
    }

    /// Append an expectation.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn push(&self, exp: impl Into<Expect>) {
        self.state
            .lock()
            .expect("not poisoned")
            .expect
            .push_back(exp.into());
    }

    /// Number of requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.state.lock().expect("not poisoned").requests.len()
    }

    /// Snapshot of the received requests.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().expect("not poisoned").requests.clone()
    }

    /// Last received request.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests().pop()
    }

    /// Number of expectations not consumed yet.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.lock().expect("not poisoned").expect.len()
    }

    fn answer(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut state = self.state.lock().map_err(Error::mutex_lock)?;
        let method = request.method.clone();
        let path = request.url.path().to_owned();
        state.requests.push(request);
        let expect = state.expect.pop_front().ok_or(Error::NothingIsExpected)?;
        drop(state);

        match expect.request {
            Some(expected) if expected.method != method || expected.path != path => {
                Err(Error::UnexpectedRequest(method, path, expected))
            }
            _ => match expect.reply {
                Reply::Response {
                    status,
                    headers,
                    body,
                } => Ok(HttpResponse {
                    status,
                    headers,
                    body,
                }),
                Reply::NetworkError { reason, retryable } => {
                    Err(Error::Network { reason, retryable })
                }
            },
        }
    }
}

impl Transport for MockTransport {
    type Error = Error;

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        self.answer(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;
    use http::Method;
    use serde_json::json;

    fn request(method: Method, url: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: url.parse().unwrap(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[test]
    fn replies_in_order_and_records_requests() {
        let transport = MockTransport::with_replies([
            Reply::network_error(),
            Reply::status(200).json(json!({"ok": true})),
        ]);

        let first = tokio_test::block_on(transport.send(request(Method::GET, "http://h/a")));
        assert!(first.unwrap_err().is_retryable());

        let second = tokio_test::block_on(transport.send(request(Method::GET, "http://h/a")))
            .unwrap();
        assert_eq!(second.status, 200);
        assert_eq!(second.body, br#"{"ok":true}"#);
        assert_eq!(transport.attempts(), 2);
        assert_eq!(transport.pending(), 0);
    }

    #[test]
    fn unexpected_request_is_reported() {
        let transport = MockTransport::new();
        transport.push(Expect::delete("/pcloud/v1/tasks/t1", Reply::status(200)));

        let result = tokio_test::block_on(transport.send(request(Method::GET, "http://h/pcloud/v1/tasks/t1")));
        assert!(matches!(result, Err(Error::UnexpectedRequest(..))));
        assert!(!result.unwrap_err().is_retryable());
    }

    #[test]
    fn empty_script_is_an_error() {
        let transport = MockTransport::new();
        let result = tokio_test::block_on(transport.send(request(Method::GET, "http://h/")));
        assert!(matches!(result, Err(Error::NothingIsExpected)));
        assert_eq!(transport.attempts(), 1);
    }
}
