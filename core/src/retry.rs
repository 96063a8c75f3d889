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

//! Bounded automatic retries with exponential backoff.

use backoff::backoff::Backoff;
use backoff::ExponentialBackoff;
use http::header::RETRY_AFTER;
use http::HeaderMap;
use http::StatusCode;
use std::time::Duration;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 4;
/// Default upper bound of a single wait.
pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(30);

const INITIAL_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// When and how long to wait before resending a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    max_interval: Duration,
    initial_interval: Duration,
    retry_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_MAX_INTERVAL)
    }
}

impl RetryPolicy {
    /// `max_interval` of zero falls back to [`DEFAULT_MAX_INTERVAL`].
    #[must_use]
    pub fn new(max_retries: u32, max_interval: Duration) -> Self {
        let max_interval = if max_interval.is_zero() {
            DEFAULT_MAX_INTERVAL
        } else {
            max_interval
        };
        Self {
            max_retries,
            max_interval,
            initial_interval: INITIAL_INTERVAL.min(max_interval),
            retry_statuses: DEFAULT_RETRY_STATUSES.to_vec(),
        }
    }

    #[must_use]
    pub fn with_retry_statuses(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.retry_statuses = statuses.into_iter().collect();
        self
    }

    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    #[must_use]
    pub const fn max_interval(&self) -> Duration {
        self.max_interval
    }

    #[must_use]
    pub const fn initial_interval(&self) -> Duration {
        self.initial_interval
    }

    #[must_use]
    pub fn retry_statuses(&self) -> &[u16] {
        &self.retry_statuses
    }

    #[must_use]
    pub fn should_retry_status(&self, status: StatusCode) -> bool {
        self.retry_statuses.contains(&status.as_u16())
    }

    /// Fresh backoff state for one call.
    #[must_use]
    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            current_interval: self.initial_interval,
            initial_interval: self.initial_interval,
            multiplier: 2.0,
            max_interval: self.max_interval,
            max_elapsed_time: None,
            ..ExponentialBackoff::default()
        }
    }

    /// Wait before the next attempt.
    ///
    /// A server supplied `Retry-After` wins over the backoff schedule; both are
    /// capped at `max_interval`.
    pub fn delay_for(
        &self,
        retry_after: Option<Duration>,
        backoff: &mut ExponentialBackoff,
    ) -> Duration {
        let scheduled = backoff.next_backoff().unwrap_or(self.max_interval);
        retry_after.unwrap_or(scheduled).min(self.max_interval)
    }
}

/// `Retry-After` header value in delta-seconds form.
#[must_use]
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries(), 4);
        assert_eq!(policy.max_interval(), Duration::from_secs(30));
        assert_eq!(policy.initial_interval(), Duration::from_secs(1));
        for status in [429, 500, 502, 503, 504] {
            assert!(policy.should_retry_status(StatusCode::from_u16(status).unwrap()));
        }
        assert!(!policy.should_retry_status(StatusCode::BAD_REQUEST));
        assert!(!policy.should_retry_status(StatusCode::NOT_FOUND));
    }

    #[test]
    fn initial_interval_is_capped() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        assert_eq!(policy.initial_interval(), Duration::from_millis(10));
        let mut backoff = policy.backoff();
        for _ in 0..10 {
            assert!(policy.delay_for(None, &mut backoff) <= Duration::from_millis(10));
        }
    }

    #[test]
    fn zero_interval_uses_default() {
        let policy = RetryPolicy::new(2, Duration::ZERO);
        assert_eq!(policy.max_interval(), DEFAULT_MAX_INTERVAL);
    }

    #[test]
    fn retry_after_is_honoured_and_capped() {
        let policy = RetryPolicy::new(3, Duration::from_secs(5));
        let mut backoff = policy.backoff();
        assert_eq!(
            policy.delay_for(Some(Duration::from_secs(2)), &mut backoff),
            Duration::from_secs(2)
        );
        assert_eq!(
            policy.delay_for(Some(Duration::from_secs(120)), &mut backoff),
            Duration::from_secs(5)
        );

        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, "7".parse().unwrap());
        assert_eq!(retry_after(&headers), Some(Duration::from_secs(7)));
        headers.insert(RETRY_AFTER, "Wed, 21 Oct 2015 07:28:00 GMT".parse().unwrap());
        assert_eq!(retry_after(&headers), None);
    }

    #[test]
    fn custom_statuses() {
        let policy = RetryPolicy::default().with_retry_statuses([409]);
        assert!(policy.should_retry_status(StatusCode::CONFLICT));
        assert!(!policy.should_retry_status(StatusCode::SERVICE_UNAVAILABLE));
    }
}
