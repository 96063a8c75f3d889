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

use powervs::options::TaskGetOptions;
use powervs::Error;
use powervs_mock::MockTransport;
use powervs_mock::Reply;
use powervs_tests::service;
use powervs_tests::service_with_retries;
use serde_json::json;
use std::sync::Arc;
use tokio::test;

fn task() -> serde_json::Value {
    json!({"taskID": "t-1", "status": "completed", "operation": "create"})
}

#[test]
async fn transient_failures_are_retried() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::network_error(),
        Reply::network_error(),
        Reply::status(200).json(task()),
    ]));

    let (task, response) = service_with_retries(&transport, 3)
        .pcloud_tasks_get(&TaskGetOptions::new("t-1"))
        .await
        .unwrap();

    assert_eq!(task.task_id, "t-1");
    assert_eq!(response.status_code(), 200);
    assert_eq!(transport.attempts(), 3);
}

#[test]
async fn client_errors_are_not_retried() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::status(400).json(json!({"description": "bad task id"})),
        Reply::status(400).json(json!({"description": "bad task id"})),
        Reply::status(400).json(json!({"description": "bad task id"})),
        Reply::status(400).json(json!({"description": "bad task id"})),
    ]));

    let err = service_with_retries(&transport, 3)
        .pcloud_tasks_get(&TaskGetOptions::new("t-1"))
        .await
        .unwrap_err();

    assert_eq!(err.response().map(|r| r.status_code()), Some(400));
    assert_eq!(transport.attempts(), 1);
    assert_eq!(transport.pending(), 3);
}

#[test]
async fn retryable_statuses_are_retried() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::status(503).header("Retry-After", "0"),
        Reply::status(429),
        Reply::status(200).json(task()),
    ]));

    service_with_retries(&transport, 3)
        .pcloud_tasks_get(&TaskGetOptions::new("t-1"))
        .await
        .unwrap();

    assert_eq!(transport.attempts(), 3);
}

#[test]
async fn retryable_status_spends_the_budget() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::status(503).json(json!({"description": "attempt 1"})),
        Reply::status(503).json(json!({"description": "attempt 2"})),
        Reply::status(503).json(json!({"description": "attempt 3"})),
        Reply::status(200).json(task()),
    ]));

    let err = service_with_retries(&transport, 2)
        .pcloud_tasks_get(&TaskGetOptions::new("t-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.response().map(|r| r.status_code()), Some(503));
    assert_eq!(
        err.payload().and_then(|p| p.description.as_deref()),
        Some("attempt 3")
    );
    assert_eq!(transport.attempts(), 3);
    assert_eq!(transport.pending(), 1);
}

#[test]
async fn retry_budget_is_bounded() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::network_error(),
        Reply::network_error(),
        Reply::network_error(),
        Reply::status(200).json(task()),
    ]));

    let err = service_with_retries(&transport, 2)
        .pcloud_tasks_get(&TaskGetOptions::new("t-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(transport.attempts(), 3);
}

#[test]
async fn fatal_transport_errors_are_not_retried() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::fatal_network_error("certificate rejected"),
        Reply::status(200).json(task()),
    ]));

    let err = service_with_retries(&transport, 3)
        .pcloud_tasks_get(&TaskGetOptions::new("t-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(transport.attempts(), 1);
}

#[test]
async fn without_retries_one_attempt() {
    let transport = Arc::new(MockTransport::with_replies([
        Reply::network_error(),
        Reply::status(200).json(task()),
    ]));

    let err = service(&transport)
        .pcloud_tasks_get(&TaskGetOptions::new("t-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(transport.attempts(), 1);
}
