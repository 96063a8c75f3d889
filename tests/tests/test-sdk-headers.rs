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

use powervs::options::PvmInstanceGetOptions;
use powervs::options::ServiceBrokerHealthHeadOptions;
use powervs_core::headers::header_id;
use powervs_core::headers::user_agent;
use powervs_core::headers::SDK_NAME;
use powervs_core::headers::VERSION;
use powervs_mock::Expect;
use powervs_mock::MockTransport;
use powervs_mock::Reply;
use powervs_tests::pvm_instance_json;
use powervs_tests::service;
use powervs_tests::CLOUD_INSTANCE_ID;
use powervs_tests::PVM_INSTANCE_ID;
use std::sync::Arc;
use tokio::test;

#[test]
async fn header_id_examples() {
    assert_eq!(header_id("ServiceBrokerHealthHead"), "service.broker.health.head");
    assert_eq!(header_id("PcloudV2VolumesPost"), "pcloud.v2.volumes.post");
    assert_eq!(header_id("PcloudPvminstancesGetall"), "pcloud.pvminstances.getall");
}

#[test]
async fn user_agent_template_is_stable() {
    let first = user_agent();
    let prefix = format!("{SDK_NAME}/{VERSION} (lang=rust; arch=");
    assert!(first.starts_with(&prefix), "unexpected user agent: {first}");
    assert!(first.contains("; os="));
    assert!(first.contains("; runtime-version="));
    assert!(first.ends_with(')'));
    assert_eq!(user_agent(), first);
    assert!(SDK_NAME.ends_with("-sdk"));
}

#[test]
async fn every_request_carries_sdk_headers() {
    let transport = Arc::new(MockTransport::new());
    transport.push(Expect::get(
        format!("/pcloud/v1/cloud-instances/{CLOUD_INSTANCE_ID}/pvm-instances/{PVM_INSTANCE_ID}"),
        Reply::status(200).json(pvm_instance_json(PVM_INSTANCE_ID, "db01")),
    ));
    transport.push(Expect::head("/broker/v1/health", Reply::status(200)));

    let service = service(&transport);
    service
        .pcloud_pvminstances_get(&PvmInstanceGetOptions::new(CLOUD_INSTANCE_ID, PVM_INSTANCE_ID))
        .await
        .unwrap();
    service
        .service_broker_health_head(&ServiceBrokerHealthHeadOptions::new())
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].headers["id"], "pcloud.pvminstances.get");
    assert_eq!(requests[1].headers["id"], "service.broker.health.head");
    for request in &requests {
        assert_eq!(request.headers["user-agent"], user_agent());
        assert_eq!(request.headers["scheme"], "http");
        assert_eq!(request.headers["accept"], "application/json");
        assert!(request.headers.get("content-type").is_none());
    }
}

#[test]
async fn caller_headers_override_sdk_headers() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::status(200).json(pvm_instance_json(PVM_INSTANCE_ID, "db01"))
    ]));

    let options = PvmInstanceGetOptions::new(CLOUD_INSTANCE_ID, PVM_INSTANCE_ID)
        .header("X-Correlation-Id", "c-42")
        .header("ID", "overridden");
    service(&transport)
        .pcloud_pvminstances_get(&options)
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.headers["x-correlation-id"], "c-42");
    assert_eq!(request.headers["id"], "overridden");
}
