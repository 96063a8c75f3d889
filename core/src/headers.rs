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

//! SDK diagnostic headers.
//!
//! Every outgoing call carries the same three headers:
//!
//! | Header       | Value                                                       |
//! |--------------|-------------------------------------------------------------|
//! | `User-Agent` | `powervs-rust-sdk/<version> (lang=rust; arch=..; os=..; runtime-version=..)` |
//! | `ID`         | operation identifier, dot separated and lowercased          |
//! | `scheme`     | literal `http`                                              |
//!
//! The user agent is built once per process and shared afterwards.
//!
//! ```rust
//! use powervs_core::headers::header_id;
//!
//! assert_eq!(header_id("ServiceBrokerHealthHead"), "service.broker.health.head");
//! assert_eq!(header_id("PcloudV2VolumesPost"), "pcloud.v2.volumes.post");
//! ```

use http::header::HeaderName;
use http::header::HeaderValue;
use http::header::USER_AGENT;
use http::HeaderMap;
use std::sync::OnceLock;

/// Name reported to the analytics collector. Must end with `-sdk`.
pub const SDK_NAME: &str = "powervs-rust-sdk";

/// SDK version reported in the user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the user agent.
pub const HEADER_NAME_USER_AGENT: &str = "User-Agent";
/// Header carrying the operation identifier.
pub const HEADER_NAME_ID: &str = "ID";
/// Header carrying the scheme marker.
pub const HEADER_NAME_SCHEME: &str = "scheme";
/// Value of the scheme marker.
pub const SCHEME: &str = "http";

static SYSTEM_INFO: OnceLock<String> = OnceLock::new();
static USER_AGENT_INFO: OnceLock<String> = OnceLock::new();

/// Runtime description: `(lang=rust; arch=..; os=..; runtime-version=..)`.
pub fn system_info() -> &'static str {
    SYSTEM_INFO.get_or_init(|| {
        let runtime_version = option_env!("CARGO_PKG_RUST_VERSION")
            .filter(|v| !v.is_empty())
            .unwrap_or("unknown");
        format!(
            "(lang=rust; arch={}; os={}; runtime-version={})",
            std::env::consts::ARCH,
            std::env::consts::OS,
            runtime_version
        )
    })
}

/// Full user agent string. Returns the same value for the life of the process.
pub fn user_agent() -> &'static str {
    USER_AGENT_INFO.get_or_init(|| format!("{SDK_NAME}/{VERSION} {}", system_info()))
}

/// Derive the `ID` header value from an operation identifier.
///
/// A `.` is inserted before every uppercase character except the first one and
/// the whole result is lowercased. This is an exact string contract relied on
/// by call-site analytics; do not change it.
pub fn header_id(operation_id: &str) -> String {
    let mut result = String::with_capacity(operation_id.len() + 8);
    for (i, c) in operation_id.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            result.push('.');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// The set of SDK headers attached to one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkHeaders {
    user_agent: &'static str,
    id: String,
    scheme: &'static str,
}

impl SdkHeaders {
    /// `User-Agent` value.
    #[must_use]
    pub const fn user_agent(&self) -> &'static str {
        self.user_agent
    }

    /// `ID` value.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `scheme` value.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        self.scheme
    }

    /// Header name/value pairs, in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (HEADER_NAME_USER_AGENT, self.user_agent),
            (HEADER_NAME_ID, self.id.as_str()),
            (HEADER_NAME_SCHEME, self.scheme),
        ]
        .into_iter()
    }

    /// Insert the headers into `headers`, replacing previous values.
    ///
    /// Values that are not valid header text are skipped; only an operation
    /// identifier with control characters can produce one.
    pub fn apply(&self, headers: &mut HeaderMap) {
        if let Ok(value) = HeaderValue::from_str(self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        if let Ok(value) = HeaderValue::from_str(&self.id) {
            headers.insert(HeaderName::from_static("id"), value);
        }
        headers.insert(
            HeaderName::from_static("scheme"),
            HeaderValue::from_static(SCHEME),
        );
    }
}

impl From<SdkHeaders> for HeaderMap {
    fn from(sdk: SdkHeaders) -> Self {
        let mut headers = Self::new();
        sdk.apply(&mut headers);
        headers
    }
}

/// Build the SDK headers for one call.
///
/// `service_name` and `service_version` are accepted for parity with other
/// services; the header set currently depends only on `operation_id`.
pub fn sdk_headers(_service_name: &str, _service_version: &str, operation_id: &str) -> SdkHeaders {
    SdkHeaders {
        user_agent: user_agent(),
        id: header_id(operation_id),
        scheme: SCHEME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_id_inserts_dots_before_uppercase() {
        assert_eq!(
            header_id("ServiceBrokerHealthHead"),
            "service.broker.health.head"
        );
        assert_eq!(header_id("PcloudV2VolumesPost"), "pcloud.v2.volumes.post");
        assert_eq!(
            header_id("InternalV1StorageRegionsThresholdsPut"),
            "internal.v1.storage.regions.thresholds.put"
        );
    }

    #[test]
    fn header_id_edge_cases() {
        assert_eq!(header_id(""), "");
        assert_eq!(header_id("A"), "a");
        assert_eq!(header_id("already.lower"), "already.lower");
        // Consecutive capitals each get a separator.
        assert_eq!(header_id("GetVPN"), "get.v.p.n");
        // Leading lowercase is untouched.
        assert_eq!(header_id("pcloudTasksGet"), "pcloud.tasks.get");
    }

    #[test]
    fn user_agent_matches_template_and_is_stable() {
        let first = user_agent();
        let second = user_agent();
        assert!(std::ptr::eq(first, second));
        assert!(first.starts_with(&format!("{SDK_NAME}/{VERSION} (lang=rust; arch=")));
        assert!(first.contains(&format!("; os={}; ", std::env::consts::OS)));
        assert!(first.contains("; runtime-version="));
        assert!(first.ends_with(')'));
    }

    #[test]
    fn sdk_headers_contain_exactly_three_entries() {
        let sdk = sdk_headers("powervs", "V1", "PcloudTasksGet");
        let names: Vec<_> = sdk.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["User-Agent", "ID", "scheme"]);
        assert_eq!(sdk.id(), "pcloud.tasks.get");
        assert_eq!(sdk.scheme(), "http");

        let map = HeaderMap::from(sdk);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("id").and_then(|v| v.to_str().ok()), Some("pcloud.tasks.get"));
        assert_eq!(map.get("scheme").and_then(|v| v.to_str().ok()), Some("http"));
        assert_eq!(
            map.get("user-agent").and_then(|v| v.to_str().ok()),
            Some(user_agent())
        );
    }
}
