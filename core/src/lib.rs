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

//! Transport-agnostic building blocks of the PowerVS SDK.
//!
//! - [`operation`]: static descriptors of REST operations.
//! - [`params`]: caller-supplied values and their validation.
//! - [`headers`]: SDK diagnostic headers (`User-Agent`, `ID`, `scheme`).
//! - [`auth`]: authenticators.
//! - [`retry`]: retry policy.
//! - [`response`] and [`error`]: what a call returns.
//!
//! Nothing here performs I/O; see `powervs-http` for the executor.

pub mod auth;
pub mod error;
pub mod headers;
pub mod operation;
pub mod params;
pub mod response;
pub mod retry;

#[doc(inline)]
pub use auth::AuthError;
#[doc(inline)]
pub use auth::Authenticator;
#[doc(inline)]
pub use error::ApiError;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use error::ErrorPayload;
#[doc(inline)]
pub use error::ValidationError;
#[doc(inline)]
pub use operation::Operation;
#[doc(inline)]
pub use params::Params;
#[doc(inline)]
pub use params::RequestOptions;
#[doc(inline)]
pub use response::DetailedResponse;
#[doc(inline)]
pub use retry::RetryPolicy;

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Result of every service call: decoded value plus response envelope.
pub type CallResult<R> = Result<(R, DetailedResponse), Error>;

/// Result of operations whose response body carries nothing of interest.
///
/// Accepts any body, including an empty one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Empty {}

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accepts_any_body() {
        assert_eq!(serde_json::from_str::<Empty>("null").unwrap(), Empty {});
        assert_eq!(serde_json::from_str::<Empty>("{}").unwrap(), Empty {});
        assert_eq!(
            serde_json::from_str::<Empty>(r#"{"status":"ok"}"#).unwrap(),
            Empty {}
        );
    }
}
