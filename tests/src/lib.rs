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

//! Support code for the end-to-end tests.

use powervs::PowervsV1;
use powervs::PowervsV1Options;
use powervs_core::auth::NoAuthAuthenticator;
use powervs_mock::MockTransport;
use serde_json::json;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Base URL of the mocked deployment.
pub const SERVICE_URL: &str = "https://us-south.power-iaas.cloud.ibm.com";

/// Identifiers used across tests.
pub const CLOUD_INSTANCE_ID: &str = "2f8e1c3a7d104b7f9d0e5c1a6b3f4e21";
pub const PVM_INSTANCE_ID: &str = "b6c7a8e3-4f02-4d5a-9c41-0e2d7f8a9b10";

/// Retry interval short enough to keep tests fast.
pub const RETRY_INTERVAL: Duration = Duration::from_millis(5);

pub type Service = PowervsV1<Arc<MockTransport>, NoAuthAuthenticator>;

/// Client talking to `transport`.
///
/// # Panics
///
/// Panics if the client cannot be created.
#[must_use]
pub fn service(transport: &Arc<MockTransport>) -> Service {
    PowervsV1::new(
        PowervsV1Options::new(transport.clone(), NoAuthAuthenticator).url(SERVICE_URL),
    )
    .expect("valid service URL")
}

/// Client talking to `transport` with retries enabled.
#[must_use]
pub fn service_with_retries(transport: &Arc<MockTransport>, max_retries: u32) -> Service {
    let mut service = service(transport);
    service.enable_retries(max_retries, RETRY_INTERVAL);
    service
}

/// Body of an instance as returned by the service.
#[must_use]
pub fn pvm_instance_json(id: &str, name: &str) -> Value {
    json!({
        "pvmInstanceID": id,
        "serverName": name,
        "status": "ACTIVE",
        "sysType": "s922",
        "procType": "shared",
        "processors": 0.5,
        "memory": 4,
        "networks": [
            {
                "networkID": "net-1",
                "networkName": "public",
                "ipAddress": "192.168.0.10",
                "macAddress": "fa:16:3e:00:00:01",
                "type": "fixed"
            }
        ],
        "creationDate": "2024-03-01T10:15:00Z"
    })
}

/// Error body as returned by the service.
#[must_use]
pub fn error_json(description: &str) -> Value {
    json!({
        "code": 404,
        "description": description,
        "error": "Not Found"
    })
}
