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

use powervs::operations;
use powervs::options::PvmInstanceGetOptions;
use powervs::options::SshKeyCreateOptions;
use powervs::Error;
use powervs::Params;
use powervs_core::operation::Location;
use powervs_core::ValidationError;
use powervs_mock::Expect;
use powervs_mock::MockTransport;
use powervs_mock::Reply;
use powervs_tests::error_json;
use powervs_tests::pvm_instance_json;
use powervs_tests::service;
use powervs_tests::CLOUD_INSTANCE_ID;
use powervs_tests::PVM_INSTANCE_ID;
use serde_json::json;
use std::sync::Arc;
use tokio::test;

fn instance_path() -> String {
    format!("/pcloud/v1/cloud-instances/{CLOUD_INSTANCE_ID}/pvm-instances/{PVM_INSTANCE_ID}")
}

#[test]
async fn success_returns_result_and_envelope() {
    let transport = Arc::new(MockTransport::new());
    transport.push(Expect::get(
        instance_path(),
        Reply::status(200).json(pvm_instance_json(PVM_INSTANCE_ID, "db01")),
    ));

    let (instance, response) = service(&transport)
        .pcloud_pvminstances_get(&PvmInstanceGetOptions::new(CLOUD_INSTANCE_ID, PVM_INSTANCE_ID))
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(instance.pvm_instance_id, PVM_INSTANCE_ID);
    assert_eq!(instance.server_name, "db01");
    assert_eq!(instance.networks[0].kind.as_deref(), Some("fixed"));
    assert!(instance.creation_date.is_some());
    assert_eq!(transport.pending(), 0);
}

#[test]
async fn not_found_is_api_error_with_payload() {
    let transport = Arc::new(MockTransport::new());
    transport.push(Expect::get(
        instance_path(),
        Reply::status(404).json(error_json("pvm instance does not exist")),
    ));

    let err = service(&transport)
        .pcloud_pvminstances_get(&PvmInstanceGetOptions::new(CLOUD_INSTANCE_ID, PVM_INSTANCE_ID))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.response().map(|r| r.status_code()), Some(404));
    let payload = err.payload().unwrap();
    assert_eq!(payload.description.as_deref(), Some("pvm instance does not exist"));
    assert_eq!(payload.message(), Some("pvm instance does not exist"));
    assert!(!err.is_local());
}

#[test]
async fn missing_required_field_sends_nothing() {
    let transport = Arc::new(MockTransport::new());
    let params = Params::new()
        .path("tenant_id", "tenant-1")
        .field("sshKey", "ssh-ed25519 AAAAC3Nza");

    let err = service(&transport)
        .call::<serde_json::Value>(&operations::PCLOUD_TENANTS_SSHKEYS_POST, &params)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingParam {
            operation: "PcloudTenantsSshkeysPost",
            location: Location::Body,
            name: "name",
        })
    ));
    assert!(err.is_local());
    assert_eq!(transport.attempts(), 0);
}

#[test]
async fn empty_required_field_sends_nothing() {
    let transport = Arc::new(MockTransport::new());
    let options = SshKeyCreateOptions::new("tenant-1", "", "ssh-ed25519 AAAAC3Nza");

    let err = service(&transport)
        .pcloud_tenants_sshkeys_post(&options)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::EmptyParam { name: "name", .. })
    ));
    assert_eq!(transport.attempts(), 0);
}

#[test]
async fn undeclared_parameter_is_rejected() {
    let transport = Arc::new(MockTransport::new());
    let params = Params::new().query("limit", 10);

    let err = service(&transport)
        .call::<serde_json::Value>(&operations::SERVICE_BROKER_HEALTH, &params)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::UnknownParam { location: Location::Query, .. })
    ));
    assert_eq!(transport.attempts(), 0);
}

#[test]
async fn malformed_success_body_is_decode_error() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::status(200).json(json!({"pvmInstanceID": 17, "serverName": "db01"}))
    ]));

    let err = service(&transport)
        .pcloud_pvminstances_get(&PvmInstanceGetOptions::new(CLOUD_INSTANCE_ID, PVM_INSTANCE_ID))
        .await
        .unwrap_err();

    match err {
        Error::Decode { response, .. } => assert_eq!(response.status_code(), 200),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
async fn auxiliary_properties_join_the_body() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::status(200).json(json!({"name": "ops", "sshKey": "ssh-ed25519 AAAAC3Nza"}))
    ]));
    let params = Params::new()
        .path("tenant_id", "tenant-1")
        .field("name", "ops")
        .field("sshKey", "ssh-ed25519 AAAAC3Nza")
        .property("comment", "rotated");

    service(&transport)
        .call::<serde_json::Value>(&operations::PCLOUD_TENANTS_SSHKEYS_POST, &params)
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
    assert_eq!(
        body,
        json!({"name": "ops", "sshKey": "ssh-ed25519 AAAAC3Nza", "comment": "rotated"})
    );
}

#[test]
async fn auxiliary_property_cannot_shadow_a_field() {
    let transport = Arc::new(MockTransport::new());
    let params = Params::new()
        .path("tenant_id", "tenant-1")
        .field("name", "ops")
        .field("sshKey", "ssh-ed25519 AAAAC3Nza")
        .property("name", "other");

    let err = service(&transport)
        .call::<serde_json::Value>(&operations::PCLOUD_TENANTS_SSHKEYS_POST, &params)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::PropertyCollision { ref name, .. }) if name == "name"
    ));
    assert_eq!(transport.attempts(), 0);
}

#[test]
async fn property_maps_are_checked_like_single_properties() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::status(200).json(json!({"name": "ops", "sshKey": "ssh-ed25519 AAAAC3Nza"}))
    ]));
    let base = Params::new()
        .path("tenant_id", "tenant-1")
        .field("name", "ops")
        .field("sshKey", "ssh-ed25519 AAAAC3Nza");

    let colliding = json!({"sshKey": "ssh-rsa AAAAB3Nza", "comment": "rotated"});
    let err = service(&transport)
        .call::<serde_json::Value>(
            &operations::PCLOUD_TENANTS_SSHKEYS_POST,
            &base.clone().properties(colliding.as_object().unwrap()),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::PropertyCollision { ref name, .. }) if name == "sshKey"
    ));
    assert_eq!(transport.attempts(), 0);

    let extra = json!({"comment": "rotated", "labels": ["ops"]});
    service(&transport)
        .call::<serde_json::Value>(
            &operations::PCLOUD_TENANTS_SSHKEYS_POST,
            &base.properties(extra.as_object().unwrap()),
        )
        .await
        .unwrap();
    let request = transport.last_request().unwrap();
    let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
    assert_eq!(body["labels"], json!(["ops"]));
    assert_eq!(body["name"], "ops");
}

#[test]
async fn concurrent_calls_share_one_client() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::status(200).json(pvm_instance_json(PVM_INSTANCE_ID, "db01")),
        Reply::status(200).json(pvm_instance_json(PVM_INSTANCE_ID, "db01")),
    ]));
    let service = service(&transport);
    let options = PvmInstanceGetOptions::new(CLOUD_INSTANCE_ID, PVM_INSTANCE_ID);

    let (first, second) = tokio::join!(
        service.pcloud_pvminstances_get(&options),
        service.pcloud_pvminstances_get(&options),
    );

    assert_eq!(first.unwrap().0, second.unwrap().0);
    assert_eq!(transport.attempts(), 2);
}
