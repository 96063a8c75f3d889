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

//! Subcommands of the `powervs` binary.
//!
//! - `operations`: list the catalog with the `ID` header of each entry.
//! - `health` and `version`: broker status.
//! - `call`: execute any catalog operation with raw parameters and print the
//!   JSON answer.

use crate::Error;
use clap::Subcommand;
use powervs::operations;
use powervs::options::ServiceBrokerHealthOptions;
use powervs::options::ServiceBrokerVersionOptions;
use powervs::Params;
use powervs::PowervsV1;
use powervs_core::Authenticator;
use powervs_http::Transport;
use serde_json::Value;

/// Client subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known operations.
    Operations {
        /// Only operations whose identifier contains this text
        /// (case-insensitive).
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Check the health of the service broker.
    Health,
    /// Show the service broker version.
    Version,
    /// Call an operation by identifier, e.g. `PcloudPvminstancesGetall`.
    Call {
        /// Operation identifier.
        operation: String,
        /// Path parameter, `name=value`.
        #[arg(long = "path", value_name = "NAME=VALUE", value_parser = parse_key_value)]
        path: Vec<(String, String)>,
        /// Query parameter, `name=value`.
        #[arg(long = "query", value_name = "NAME=VALUE", value_parser = parse_key_value)]
        query: Vec<(String, String)>,
        /// Request header, `name=value`.
        #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_key_value)]
        header: Vec<(String, String)>,
        /// JSON request body.
        #[arg(long)]
        body: Option<String>,
    },
}

/// Catalog lines: identifier, method, path and `ID` header.
#[must_use]
pub fn list_operations(filter: Option<&str>) -> Vec<String> {
    let filter = filter.map(str::to_lowercase);
    operations::ALL
        .iter()
        .filter(|op| {
            filter
                .as_ref()
                .map_or(true, |f| op.id.to_lowercase().contains(f.as_str()))
        })
        .map(|op| format!(
                "{:<52} {:<6} {}  [{}]",
                op.id,
                op.method.as_str(),
                op.path,
                op.header_id()
            ))
        .collect()
}

/// Execute `command` and return the lines to print.
///
/// # Errors
///
/// Returns an error if the command arguments are invalid or the call fails.
pub async fn process_command<T, A>(
    service: &PowervsV1<T, A>,
    command: &Commands,
) -> Result<Vec<String>, Error>
where
    T: Transport,
    A: Authenticator,
{
    match command {
        Commands::Operations { filter } => Ok(list_operations(filter.as_deref())),
        Commands::Health => {
            let (health, _) = service
                .service_broker_health(&ServiceBrokerHealthOptions::new())
                .await?;
            Ok(vec![health.status])
        }
        Commands::Version => {
            let (version, _) = service
                .service_broker_version(&ServiceBrokerVersionOptions::new())
                .await?;
            Ok(vec![pretty(&serde_json::to_value(version).map_err(Error::InvalidBody)?)])
        }
        Commands::Call {
            operation,
            path,
            query,
            header,
            body,
        } => {
            let op = operations::find(operation)
                .ok_or_else(|| Error::UnknownOperation(operation.clone()))?;
            let mut params = Params::new();
            for (name, value) in path {
                params = params.path(name, value);
            }
            for (name, value) in query {
                params = params.query(name, value);
            }
            for (name, value) in header {
                params = params.header(name, value);
            }
            if let Some(body) = body {
                let body: Value = serde_json::from_str(body).map_err(Error::InvalidBody)?;
                params = params.body(body);
            }
            let (result, response) = service.call::<Value>(op, &params).await?;
            tracing::info!(operation = op.id, status = response.status_code(), "call completed");
            Ok(if result.is_null() {
                vec![format!("{}", response.status)]
            } else {
                vec![pretty(&result)]
            })
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{arg}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use powervs::PowervsV1Options;
    use powervs_core::auth::NoAuthAuthenticator;
    use powervs_mock::Expect;
    use powervs_mock::MockTransport;
    use powervs_mock::Reply;
    use serde_json::json;
    use std::sync::Arc;

    fn service(transport: &Arc<MockTransport>) -> PowervsV1<Arc<MockTransport>, NoAuthAuthenticator> {
        PowervsV1::new(PowervsV1Options::new(transport.clone(), NoAuthAuthenticator).url("http://localhost"))
            .unwrap()
    }

    #[test]
    fn key_values() {
        assert_eq!(
            parse_key_value("filter=type:vlan=x").unwrap(),
            ("filter".to_owned(), "type:vlan=x".to_owned())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn operation_listing_is_filtered() {
        assert_eq!(list_operations(None).len(), operations::ALL.len());
        let lines = list_operations(Some("tasksget"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("/pcloud/v1/tasks/{task_id}"));
        assert!(lines[0].contains("[pcloud.tasks.get]"));
    }

    #[tokio::test]
    async fn call_sends_raw_parameters() {
        let transport = Arc::new(MockTransport::new());
        transport.push(Expect::get(
            "/pcloud/v1/cloud-instances/ci-1/networks",
            Reply::status(200).json(json!({"networks": []})),
        ));

        let command = Commands::Call {
            operation: "PcloudNetworksGetall".into(),
            path: vec![("cloud_instance_id".into(), "ci-1".into())],
            query: vec![("filter".into(), "type:vlan".into())],
            header: vec![("X-Trace".into(), "1".into())],
            body: None,
        };
        let lines = process_command(&service(&transport), &command).await.unwrap();
        assert_eq!(lines, vec![pretty(&json!({"networks": []}))]);

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.query(), Some("filter=type%3Avlan"));
        assert_eq!(request.headers["x-trace"], "1");
    }

    #[tokio::test]
    async fn unknown_operation_does_not_send() {
        let transport = Arc::new(MockTransport::new());
        let command = Commands::Call {
            operation: "PcloudNothingGet".into(),
            path: Vec::new(),
            query: Vec::new(),
            header: Vec::new(),
            body: None,
        };
        let err = process_command(&service(&transport), &command).await.unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(id) if id == "PcloudNothingGet"));
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn health_prints_status() {
        let transport = Arc::new(MockTransport::with_replies([
            Reply::status(200).json(json!({"status": "OK"}))
        ]));
        let lines = process_command(&service(&transport), &Commands::Health).await.unwrap();
        assert_eq!(lines, vec!["OK".to_owned()]);
    }
}
