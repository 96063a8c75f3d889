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

//! Parameter values for one call and their validation against an
//! [`Operation`].
//!
//! [`Params`] is the untyped options value every call goes through. Typed
//! option structs implement [`RequestOptions`] and convert into it.
//!
//! ```rust
//! use powervs_core::operation::{Method, Operation, Param};
//! use powervs_core::params::Params;
//!
//! static KEY_POST: Operation = Operation {
//!     id: "PcloudTenantsSshkeysPost",
//!     method: Method::Post,
//!     path: "/pcloud/v1/tenants/{tenant_id}/sshkeys",
//!     params: &[
//!         Param::path("tenant_id"),
//!         Param::body("name").required(),
//!         Param::body("sshKey").required(),
//!     ],
//!     success: 200,
//!     body: true,
//! };
//!
//! let params = Params::new()
//!     .path("tenant_id", "t-1")
//!     .field("name", "laptop")
//!     .field("sshKey", "ssh-rsa AAAA");
//! assert!(params.validate(&KEY_POST).is_ok());
//!
//! // Missing required body member.
//! let params = Params::new().path("tenant_id", "t-1").field("name", "laptop");
//! assert!(params.validate(&KEY_POST).is_err());
//! ```

use crate::error::ValidationError;
use crate::operation::Location;
use crate::operation::Operation;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Typed per-operation options.
pub trait RequestOptions {
    /// Operation these options are for.
    fn operation(&self) -> &'static Operation;

    /// Convert into untyped parameters.
    fn to_params(&self) -> Params;
}

/// Values supplied by the caller for one call.
#[derive(Debug, Clone, Default)]
pub struct Params {
    path: BTreeMap<String, String>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    fields: Map<String, Value>,
    body: Option<Value>,
    extra: Map<String, Value>,
    invalid: Vec<ValidationError>,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a path parameter.
    #[must_use]
    pub fn path(mut self, name: &str, value: impl Into<String>) -> Self {
        self.path.insert(name.to_owned(), value.into());
        self
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, name: &str, value: impl Display) -> Self {
        self.query.push((name.to_owned(), value.to_string()));
        self
    }

    /// Append a query parameter when present.
    #[must_use]
    pub fn query_opt<V: Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Append a request header.
    ///
    /// Headers not declared by the operation are still sent.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Display) -> Self {
        self.headers.push((name.to_owned(), value.to_string()));
        self
    }

    /// Append a request header when present.
    #[must_use]
    pub fn header_opt<V: Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    /// Set a known body member.
    #[must_use]
    pub fn field(mut self, name: &str, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.fields.insert(name.to_owned(), value);
            }
            Err(err) => self.invalid.push(ValidationError::InvalidValue {
                name: name.to_owned(),
                reason: err.to_string(),
            }),
        }
        self
    }

    /// Set a known body member when present.
    #[must_use]
    pub fn field_opt<V: Serialize>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    /// Use `value` as the whole request body. Known fields are merged on top.
    #[must_use]
    pub fn body(mut self, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => self.body = Some(value),
            Err(err) => self.invalid.push(ValidationError::InvalidValue {
                name: "body".to_owned(),
                reason: err.to_string(),
            }),
        }
        self
    }

    /// Set an auxiliary body property not described by the operation.
    ///
    /// A property that names a known body member is rejected at validation.
    #[must_use]
    pub fn property(mut self, key: &str, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.extra.insert(key.to_owned(), value);
            }
            Err(err) => self.invalid.push(ValidationError::InvalidValue {
                name: key.to_owned(),
                reason: err.to_string(),
            }),
        }
        self
    }

    /// Merge every auxiliary property of `properties`.
    #[must_use]
    pub fn properties(mut self, properties: &Map<String, Value>) -> Self {
        self.extra
            .extend(properties.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Query pairs in insertion order.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Caller headers in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Check the values against `op`. Performs no I/O.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a value that failed to serialize, an
    /// undeclared parameter, a body on a body-less operation, an auxiliary
    /// property shadowing a known member, or a missing/empty required
    /// parameter.
    pub fn validate(&self, op: &Operation) -> Result<(), ValidationError> {
        if let Some(err) = self.invalid.first() {
            return Err(err.clone());
        }

        for name in self.path.keys() {
            if op.param(name, Location::Path).is_none() {
                return Err(ValidationError::unknown(op, Location::Path, name));
            }
        }
        for (name, _) in &self.query {
            if op.param(name, Location::Query).is_none() {
                return Err(ValidationError::unknown(op, Location::Query, name));
            }
        }
        for name in self.fields.keys() {
            if op.param(name, Location::Body).is_none() {
                return Err(ValidationError::unknown(op, Location::Body, name));
            }
        }

        if !op.body && (self.body.is_some() || !self.fields.is_empty() || !self.extra.is_empty())
        {
            return Err(ValidationError::UnexpectedBody {
                operation: op.id,
            });
        }

        for key in self.extra.keys() {
            let shadows_field = op.param(key, Location::Body).is_some();
            let shadows_body = self
                .body
                .as_ref()
                .and_then(Value::as_object)
                .is_some_and(|body| body.contains_key(key));
            if shadows_field || shadows_body {
                return Err(ValidationError::PropertyCollision {
                    operation: op.id,
                    name: key.clone(),
                });
            }
        }

        if (!self.fields.is_empty() || !self.extra.is_empty())
            && self.body.as_ref().is_some_and(|body| !body.is_object())
        {
            return Err(ValidationError::BodyNotObject {
                operation: op.id,
            });
        }

        for param in op.params.iter().filter(|p| p.required) {
            match self.presence(param.name, param.location) {
                Presence::Missing => {
                    return Err(ValidationError::missing(op, param.location, param.name))
                }
                Presence::Empty => {
                    return Err(ValidationError::empty(op, param.location, param.name))
                }
                Presence::Present => {}
            }
        }

        for name in op.path_placeholders() {
            if !self.path.contains_key(name) {
                return Err(ValidationError::missing(op, Location::Path, name));
            }
        }

        Ok(())
    }

    /// Path segments of `op` with placeholders substituted.
    ///
    /// Segments are raw values; percent-encoding happens when they are joined
    /// to the service URL.
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder has no value.
    pub fn resolve_path(&self, op: &Operation) -> Result<Vec<String>, ValidationError> {
        op.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => self
                        .path
                        .get(name)
                        .cloned()
                        .ok_or_else(|| ValidationError::missing(op, Location::Path, name)),
                    None => Ok(segment.to_owned()),
                }
            })
            .collect()
    }

    /// JSON body of the request, or `None` for body-less operations.
    ///
    /// # Errors
    ///
    /// Returns an error when fields must be merged into a non-object body.
    pub fn encode_body(&self, op: &Operation) -> Result<Option<Value>, ValidationError> {
        if !op.body {
            return Ok(None);
        }
        let mut body = self
            .body
            .clone()
            .unwrap_or_else(|| Value::Object(Map::new()));
        if self.fields.is_empty() && self.extra.is_empty() {
            return Ok(Some(body));
        }
        let object = body
            .as_object_mut()
            .ok_or(ValidationError::BodyNotObject { operation: op.id })?;
        for (name, value) in &self.fields {
            object.insert(name.clone(), value.clone());
        }
        for (name, value) in &self.extra {
            object.insert(name.clone(), value.clone());
        }
        Ok(Some(body))
    }

    fn presence(&self, name: &str, location: Location) -> Presence {
        match location {
            Location::Path => Presence::of_str(self.path.get(name).map(String::as_str)),
            Location::Query => Presence::of_str(
                self.query
                    .iter()
                    .find(|(k, _)| k == name)
                    .map(|(_, v)| v.as_str()),
            ),
            Location::Header => Presence::of_str(
                self.headers
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v.as_str()),
            ),
            Location::Body => {
                let value = self.fields.get(name).or_else(|| {
                    self.body
                        .as_ref()
                        .and_then(Value::as_object)
                        .and_then(|body| body.get(name))
                });
                match value {
                    None | Some(Value::Null) => Presence::Missing,
                    Some(Value::String(s)) if s.is_empty() => Presence::Empty,
                    Some(_) => Presence::Present,
                }
            }
        }
    }
}

enum Presence {
    Missing,
    Empty,
    Present,
}

impl Presence {
    fn of_str(value: Option<&str>) -> Self {
        match value {
            None => Self::Missing,
            Some("") => Self::Empty,
            Some(_) => Self::Present,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Method;
    use crate::operation::Param;
    use serde_json::json;

    static NETWORK_POST: Operation = Operation {
        id: "PcloudNetworksPost",
        method: Method::Post,
        path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks",
        params: &[
            Param::path("cloud_instance_id"),
            Param::body("type").required(),
            Param::body("name"),
            Param::body("cidr"),
        ],
        success: 201,
        body: true,
    };

    static EVENTS_GET: Operation = Operation {
        id: "PcloudEventsGetquery",
        method: Method::Get,
        path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/events",
        params: &[
            Param::path("cloud_instance_id"),
            Param::query("time"),
            Param::query("from_time"),
            Param::header("Accept-Language"),
        ],
        success: 200,
        body: false,
    };

    #[test]
    fn missing_path_param_is_rejected() {
        let err = Params::new()
            .field("type", "vlan")
            .validate(&NETWORK_POST)
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingParam {
                location: Location::Path,
                name: "cloud_instance_id",
                ..
            }
        ));
    }

    #[test]
    fn empty_required_value_is_rejected() {
        let err = Params::new()
            .path("cloud_instance_id", "")
            .field("type", "vlan")
            .validate(&NETWORK_POST)
            .unwrap_err();
        assert!(matches!(err, ValidationError::EmptyParam { .. }));

        let err = Params::new()
            .path("cloud_instance_id", "ci")
            .field("type", "")
            .validate(&NETWORK_POST)
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::EmptyParam {
                location: Location::Body,
                ..
            }
        ));
    }

    #[test]
    fn required_body_member_may_come_from_whole_body() {
        let params = Params::new()
            .path("cloud_instance_id", "ci")
            .body(json!({"type": "pub-vlan"}));
        assert!(params.validate(&NETWORK_POST).is_ok());
    }

    #[test]
    fn undeclared_params_are_rejected() {
        let err = Params::new()
            .path("cloud_instance_id", "ci")
            .query("limit", 10)
            .validate(&EVENTS_GET)
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnknownParam { .. }));
    }

    #[test]
    fn body_on_bodyless_operation_is_rejected() {
        let err = Params::new()
            .path("cloud_instance_id", "ci")
            .property("x", 1)
            .validate(&EVENTS_GET)
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnexpectedBody { .. }));
    }

    #[test]
    fn property_must_not_shadow_known_member() {
        let err = Params::new()
            .path("cloud_instance_id", "ci")
            .field("type", "vlan")
            .property("name", "shadow")
            .validate(&NETWORK_POST)
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::PropertyCollision { name, .. } if name == "name"
        ));
    }

    #[test]
    fn body_merges_fields_and_properties() {
        let params = Params::new()
            .path("cloud_instance_id", "ci")
            .body(json!({"type": "vlan", "jumbo": false}))
            .field("type", "pub-vlan")
            .field_opt::<String>("name", None)
            .field("cidr", "10.0.0.0/24")
            .property("mtu", 9000);
        params.validate(&NETWORK_POST).unwrap();
        let body = params.encode_body(&NETWORK_POST).unwrap().unwrap();
        assert_eq!(
            body,
            json!({"type": "pub-vlan", "jumbo": false, "cidr": "10.0.0.0/24", "mtu": 9000})
        );
    }

    #[test]
    fn body_less_operation_encodes_nothing() {
        let params = Params::new().path("cloud_instance_id", "ci");
        assert_eq!(params.encode_body(&EVENTS_GET).unwrap(), None);
    }

    #[test]
    fn body_operation_without_values_sends_empty_object() {
        let params = Params::new().path("cloud_instance_id", "ci");
        assert_eq!(
            params.encode_body(&NETWORK_POST).unwrap(),
            Some(json!({}))
        );
    }

    #[test]
    fn path_resolution_substitutes_placeholders() {
        let params = Params::new().path("cloud_instance_id", "a b/c");
        let segments = params.resolve_path(&EVENTS_GET).unwrap();
        assert_eq!(
            segments,
            vec!["pcloud", "v1", "cloud-instances", "a b/c", "events"]
        );
    }

    #[test]
    fn optional_query_and_headers() {
        let params = Params::new()
            .path("cloud_instance_id", "ci")
            .query_opt("time", Some("2023-01-01T00:00:00Z"))
            .query_opt::<&str>("from_time", None)
            .header_opt("Accept-Language", Some("en"));
        params.validate(&EVENTS_GET).unwrap();
        assert_eq!(params.query_pairs().len(), 1);
        assert_eq!(params.headers().len(), 1);
    }
}
