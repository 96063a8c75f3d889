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

//! Error taxonomy of a service call.
//!
//! | Variant             | Reached server | Envelope | Retried                 |
//! |---------------------|----------------|----------|-------------------------|
//! | [`Error::Validation`] | no           | no       | never                   |
//! | [`Error::Auth`]       | no           | no       | never                   |
//! | [`Error::Network`]    | unknown      | no       | if enabled and transient|
//! | [`Error::Api`]        | yes          | yes      | if status is retryable  |
//! | [`Error::Decode`]     | yes          | yes      | never                   |

use crate::auth::AuthError;
use crate::operation::Location;
use crate::operation::Operation;
use crate::response::DetailedResponse;
use http::StatusCode;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;

/// A request could not be built from the supplied options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingParam {
        operation: &'static str,
        location: Location,
        name: &'static str,
    },
    EmptyParam {
        operation: &'static str,
        location: Location,
        name: &'static str,
    },
    UnknownParam {
        operation: &'static str,
        location: Location,
        name: String,
    },
    PropertyCollision {
        operation: &'static str,
        name: String,
    },
    UnexpectedBody {
        operation: &'static str,
    },
    BodyNotObject {
        operation: &'static str,
    },
    InvalidValue {
        name: String,
        reason: String,
    },
}

impl ValidationError {
    pub(crate) const fn missing(op: &Operation, location: Location, name: &'static str) -> Self {
        Self::MissingParam {
            operation: op.id,
            location,
            name,
        }
    }

    pub(crate) const fn empty(op: &Operation, location: Location, name: &'static str) -> Self {
        Self::EmptyParam {
            operation: op.id,
            location,
            name,
        }
    }

    pub(crate) fn unknown(op: &Operation, location: Location, name: &str) -> Self {
        Self::UnknownParam {
            operation: op.id,
            location,
            name: name.to_owned(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParam {
                operation,
                location,
                name,
            } => write!(f, "{operation}: required {location} parameter '{name}' is missing"),
            Self::EmptyParam {
                operation,
                location,
                name,
            } => write!(f, "{operation}: required {location} parameter '{name}' is empty"),
            Self::UnknownParam {
                operation,
                location,
                name,
            } => write!(f, "{operation}: unknown {location} parameter '{name}'"),
            Self::PropertyCollision { operation, name } => write!(
                f,
                "{operation}: additional property '{name}' collides with a body member"
            ),
            Self::UnexpectedBody { operation } => {
                write!(f, "{operation}: operation does not accept a request body")
            }
            Self::BodyNotObject { operation } => {
                write!(f, "{operation}: body members require a JSON object body")
            }
            Self::InvalidValue { name, reason } => {
                write!(f, "value for '{name}' cannot be serialized: {reason}")
            }
        }
    }
}

impl StdError for ValidationError {}

/// Error code as sent by the server, numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Number(i64),
    Text(String),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of an `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "moreInfo", default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Structured error body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub errors: Vec<ErrorItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ErrorItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ErrorItem>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ErrorPayload {
    /// Most specific human-readable message in the payload.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.errors
            .iter()
            .find_map(|e| e.message.as_deref())
            .or(self.message.as_deref())
            .or(self.description.as_deref())
            .or(self.error.as_deref())
    }
}

/// The server answered with a status other than the expected one.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub response: DetailedResponse,
    /// Decoded error body, when the body had an error shape.
    pub payload: Option<ErrorPayload>,
}

impl ApiError {
    /// Build from a response, decoding the body when possible.
    #[must_use]
    pub fn from_response(response: DetailedResponse) -> Self {
        let payload = serde_json::from_slice::<ErrorPayload>(&response.body)
            .ok()
            .filter(|p| p.message().is_some() || p.code.is_some());
        Self { response, payload }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.response.status
    }

    /// Payload message, falling back to the raw body and then to the
    /// canonical status reason.
    #[must_use]
    pub fn message(&self) -> String {
        if let Some(message) = self.payload.as_ref().and_then(ErrorPayload::message) {
            return message.to_owned();
        }
        if !self.response.is_empty() {
            return self.response.text();
        }
        self.response
            .status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.response.status, self.message())
    }
}

/// Error returned by every service call.
#[derive(Debug)]
pub enum Error {
    /// Required option missing or malformed; nothing was sent.
    Validation(ValidationError),
    /// Credentials could not be attached; nothing was sent.
    Auth(AuthError),
    /// Transport failure; no response was received.
    Network(Box<dyn StdError + Send + Sync>),
    /// Non-success status.
    Api(ApiError),
    /// Success status with a body of the wrong shape.
    Decode {
        response: DetailedResponse,
        source: serde_path_to_error::Error<serde_json::Error>,
    },
    /// Invalid client configuration.
    Config(String),
}

impl Error {
    /// Response envelope, when the server was reached.
    #[must_use]
    pub const fn response(&self) -> Option<&DetailedResponse> {
        match self {
            Self::Api(err) => Some(&err.response),
            Self::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Status code, when the server was reached.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    /// Decoded error payload of an [`Error::Api`].
    #[must_use]
    pub const fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Api(ApiError {
                payload: Some(payload),
                ..
            }) => Some(payload),
            _ => None,
        }
    }

    /// True if the request never reached the server.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Auth(_) | Self::Config(_))
    }
}

impl From<ValidationError> for Error {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<AuthError> for Error {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<ApiError> for Error {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "invalid request options: {e}"),
            Self::Auth(e) => write!(f, "authentication error: {e}"),
            Self::Network(e) => write!(f, "HTTP client error: {e}"),
            Self::Api(e) => write!(f, "API error {e}"),
            Self::Decode { response, source } => write!(
                f,
                "JSON deserialization error (status {}) at line {} column {} path {}: {source}",
                response.status,
                source.inner().line(),
                source.inner().column(),
                source.path(),
            ),
            Self::Config(r) => write!(f, "invalid configuration: {r}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Auth(e) => Some(e),
            Self::Network(e) => Some(e.as_ref()),
            Self::Decode { source, .. } => Some(source.inner()),
            Self::Api(_) | Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;

    fn response(status: u16, body: &str) -> DetailedResponse {
        DetailedResponse::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn api_error_decodes_power_error_shape() {
        let err = ApiError::from_response(response(
            404,
            r#"{"code": 404, "description": "pvm-instance not found", "error": "not found"}"#,
        ));
        let payload = err.payload.as_ref().unwrap();
        assert_eq!(payload.code, Some(ErrorCode::Number(404)));
        assert_eq!(err.message(), "pvm-instance not found");
        assert_eq!(err.to_string(), "404 Not Found: pvm-instance not found");
    }

    #[test]
    fn api_error_prefers_errors_array() {
        let err = ApiError::from_response(response(
            400,
            r#"{"errors":[{"code":"bad_field","message":"name is too long"}],"trace":"abc"}"#,
        ));
        assert_eq!(err.message(), "name is too long");
        let payload = err.payload.unwrap();
        assert_eq!(payload.extra.get("trace"), Some(&Value::from("abc")));
    }

    #[test]
    fn api_error_accepts_numeric_item_codes() {
        let err = ApiError::from_response(response(
            400,
            r#"{"errors":[{"code":400,"message":"bad name"}]}"#,
        ));
        let payload = err.payload.as_ref().unwrap();
        assert_eq!(payload.errors[0].code, Some(ErrorCode::Number(400)));
        assert_eq!(err.message(), "bad name");
    }

    #[test]
    fn api_error_accepts_null_errors_array() {
        let err = ApiError::from_response(response(
            400,
            r#"{"description":"bad name","errors":null}"#,
        ));
        let payload = err.payload.as_ref().unwrap();
        assert!(payload.errors.is_empty());
        assert_eq!(payload.description.as_deref(), Some("bad name"));
    }

    #[test]
    fn api_error_keeps_raw_body_when_not_structured() {
        let err = ApiError::from_response(response(502, "<html>bad gateway</html>"));
        assert!(err.payload.is_none());
        assert_eq!(err.message(), "<html>bad gateway</html>");

        let err = ApiError::from_response(response(503, ""));
        assert_eq!(err.message(), "Service Unavailable");
    }

    #[test]
    fn error_accessors_distinguish_failure_kinds() {
        let validation = Error::from(ValidationError::UnexpectedBody {
            operation: "PcloudTasksGet",
        });
        assert!(validation.is_local());
        assert!(validation.response().is_none());

        let api = Error::from(ApiError::from_response(response(
            409,
            r#"{"message":"conflict"}"#,
        )));
        assert!(!api.is_local());
        assert_eq!(api.status(), Some(StatusCode::CONFLICT));
        assert_eq!(api.payload().and_then(ErrorPayload::message), Some("conflict"));
    }
}
