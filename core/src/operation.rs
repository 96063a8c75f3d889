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

//! Static description of REST operations.
//!
//! An [`Operation`] is plain data: method, path template, parameter list and
//! the expected success status. A single executor interprets it, so adding an
//! endpoint means adding one descriptor rather than a new call wrapper.
//!
//! ```rust
//! use powervs_core::operation::{Location, Method, Operation, Param};
//!
//! static TASKS_GET: Operation = Operation {
//!     id: "PcloudTasksGet",
//!     method: Method::Get,
//!     path: "/pcloud/v1/tasks/{task_id}",
//!     params: &[Param::path("task_id")],
//!     success: 200,
//!     body: false,
//! };
//!
//! assert_eq!(TASKS_GET.path_placeholders().collect::<Vec<_>>(), vec!["task_id"]);
//! ```

use std::fmt;

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Head => Self::HEAD,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Path,
    Query,
    Header,
    Body,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Body => "body",
        })
    }
}

/// One declared parameter of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Wire name: path placeholder, query key, header name or body member.
    pub name: &'static str,
    pub location: Location,
    pub required: bool,
}

impl Param {
    /// Path parameters are always required.
    #[must_use]
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Path,
            required: true,
        }
    }

    #[must_use]
    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Query,
            required: false,
        }
    }

    #[must_use]
    pub const fn header(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Header,
            required: false,
        }
    }

    #[must_use]
    pub const fn body(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Body,
            required: false,
        }
    }

    /// Mark the parameter as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Description of one REST operation.
#[derive(Debug, PartialEq, Eq)]
pub struct Operation {
    /// Mixed-case operation identifier, e.g. `PcloudPvminstancesGet`.
    pub id: &'static str,
    pub method: Method,
    /// Path template with `{placeholder}` segments.
    pub path: &'static str,
    pub params: &'static [Param],
    /// Expected success status code.
    pub success: u16,
    /// Whether the operation sends a JSON body.
    pub body: bool,
}

impl Operation {
    /// Placeholder names in template order.
    pub fn path_placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
    }

    /// Declared parameter with the given wire name and location.
    #[must_use]
    pub fn param(&self, name: &str, location: Location) -> Option<&'static Param> {
        self.params
            .iter()
            .find(|p| p.location == location && p.name == name)
    }

    /// Declared parameters in one location.
    pub fn params_in(&self, location: Location) -> impl Iterator<Item = &'static Param> {
        self.params.iter().filter(move |p| p.location == location)
    }

    /// Value for the `ID` header.
    #[must_use]
    pub fn header_id(&self) -> String {
        crate::headers::header_id(self.id)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.id, self.method, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static VOLUME_GET: Operation = Operation {
        id: "PcloudCloudinstancesVolumesGet",
        method: Method::Get,
        path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/{volume_id}",
        params: &[
            Param::path("cloud_instance_id"),
            Param::path("volume_id"),
            Param::header("Accept"),
        ],
        success: 200,
        body: false,
    };

    #[test]
    fn placeholders_follow_template_order() {
        let names: Vec<_> = VOLUME_GET.path_placeholders().collect();
        assert_eq!(names, vec!["cloud_instance_id", "volume_id"]);
    }

    #[test]
    fn param_lookup_respects_location() {
        assert!(VOLUME_GET.param("volume_id", Location::Path).is_some());
        assert!(VOLUME_GET.param("volume_id", Location::Query).is_none());
        assert_eq!(VOLUME_GET.params_in(Location::Header).count(), 1);
        assert!(VOLUME_GET.params_in(Location::Path).all(|p| p.required));
    }

    #[test]
    fn display_and_header_id() {
        assert_eq!(
            VOLUME_GET.to_string(),
            "PcloudCloudinstancesVolumesGet (GET /pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/{volume_id})"
        );
        assert_eq!(
            VOLUME_GET.header_id(),
            "pcloud.cloudinstances.volumes.get"
        );
        assert_eq!(http::Method::from(Method::Head), http::Method::HEAD);
    }
}
