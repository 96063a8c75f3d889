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

//! Response models of the typed facade.
//!
//! Only members the SDK interprets are named. Everything else the server
//! sends is kept in `extra`, so nothing is lost when the API grows.
//! Operations without a typed model decode into [`serde_json::Value`].

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use time::OffsetDateTime;

/// Free-form JSON object.
pub type Object = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(flatten)]
    pub extra: Object,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub build_date: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(flatten)]
    pub extra: Object,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudInstance {
    #[serde(rename = "cloudInstanceID")]
    pub cloud_instance_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, rename = "tenantID")]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub initialized: Option<bool>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub pvm_instances: Vec<PvmInstance>,
    #[serde(flatten)]
    pub extra: Object,
}

/// Health reported for a PVM instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvmInstanceHealth {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub last_update: Option<String>,
}

/// Network attachment of a PVM instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvmInstanceNetwork {
    #[serde(default, rename = "networkID")]
    pub network_id: Option<String>,
    #[serde(default)]
    pub network_name: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default, rename = "externalIP")]
    pub external_ip: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// A PVM (Power virtual machine) instance.
///
/// The same model serves listings, which carry a subset of the members, and
/// single-instance lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvmInstance {
    #[serde(rename = "pvmInstanceID")]
    pub pvm_instance_id: String,
    pub server_name: String,
    #[serde(default, rename = "imageID")]
    pub image_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub processors: Option<f64>,
    #[serde(default)]
    pub proc_type: Option<String>,
    #[serde(default)]
    pub memory: Option<f64>,
    #[serde(default)]
    pub sys_type: Option<String>,
    #[serde(default)]
    pub disk_size: Option<f64>,
    #[serde(default)]
    pub health: Option<PvmInstanceHealth>,
    #[serde(default)]
    pub networks: Vec<PvmInstanceNetwork>,
    #[serde(default, rename = "volumeIDs")]
    pub volume_ids: Vec<String>,
    #[serde(default)]
    pub storage_type: Option<String>,
    #[serde(default)]
    pub placement_group: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub creation_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Object,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvmInstances {
    pub pvm_instances: Vec<PvmInstance>,
}

/// Result of a PVM instance update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvmInstanceUpdateResponse {
    #[serde(default)]
    pub server_name: Option<String>,
    #[serde(default)]
    pub status_url: Option<String>,
    #[serde(default)]
    pub processors: Option<f64>,
    #[serde(default)]
    pub proc_type: Option<String>,
    #[serde(default)]
    pub memory: Option<f64>,
    #[serde(flatten)]
    pub extra: Object,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddressRange {
    #[serde(rename = "startingIPAddress")]
    pub starting_ip_address: String,
    #[serde(rename = "endingIPAddress")]
    pub ending_ip_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    #[serde(rename = "networkID")]
    pub network_id: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, rename = "vlanID")]
    pub vlan_id: Option<f64>,
    #[serde(default)]
    pub cidr: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub dns_servers: Vec<String>,
    #[serde(default)]
    pub ip_address_ranges: Vec<IpAddressRange>,
    #[serde(default)]
    pub jumbo: Option<bool>,
    #[serde(default)]
    pub mtu: Option<i64>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Object,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Networks {
    pub networks: Vec<Network>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(rename = "volumeID")]
    pub volume_id: String,
    pub name: String,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub disk_type: Option<String>,
    #[serde(default)]
    pub bootable: Option<bool>,
    #[serde(default)]
    pub shareable: Option<bool>,
    #[serde(default)]
    pub wwn: Option<String>,
    #[serde(default, rename = "pvmInstanceIDs")]
    pub pvm_instance_ids: Vec<String>,
    #[serde(default)]
    pub replication_enabled: Option<bool>,
    #[serde(default)]
    pub volume_pool: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub creation_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_update_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Object,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volumes {
    pub volumes: Vec<Volume>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementGroup {
    pub id: String,
    pub name: String,
    /// `affinity` or `anti-affinity`.
    pub policy: String,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementGroups {
    pub placement_groups: Vec<PlacementGroup>,
}

/// Id and name of a policy referenced by a VPN connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyReference {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnConnection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub peer_gateway_address: Option<String>,
    #[serde(default)]
    pub local_gateway_address: Option<String>,
    #[serde(default)]
    pub ike_policy: Option<PolicyReference>,
    #[serde(default)]
    pub ip_sec_policy: Option<PolicyReference>,
    #[serde(default)]
    pub networks: Vec<String>,
    #[serde(default)]
    pub peer_subnets: Vec<String>,
    #[serde(flatten)]
    pub extra: Object,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnConnections {
    pub vpn_connections: Vec<VpnConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshKey {
    pub name: String,
    pub ssh_key: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub creation_date: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshKeys {
    pub ssh_keys: Vec<SshKey>,
}

/// Asynchronous task tracked by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "taskID")]
    pub task_id: String,
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default, rename = "componentID")]
    pub component_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_detail: Option<String>,
    #[serde(default, rename = "cloudInstanceID")]
    pub cloud_instance_id: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub creation_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_update_date: Option<OffsetDateTime>,
    #[serde(flatten)]
    pub extra: Object,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "eventID")]
    pub event_id: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time: Option<OffsetDateTime>,
    /// Seconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub user: Option<EventUser>,
    #[serde(flatten)]
    pub extra: Object,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Events {
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn pvm_instance_keeps_unknown_members() {
        let instance: PvmInstance = serde_json::from_value(json!({
            "pvmInstanceID": "vm-1",
            "serverName": "db01",
            "processors": 0.5,
            "procType": "shared",
            "networks": [{"networkID": "net-1", "ipAddress": "10.0.0.5", "type": "fixed"}],
            "creationDate": "2024-03-01T12:30:00Z",
            "srcs": [[{"src": "A6005008"}]]
        }))
        .unwrap();

        assert_eq!(instance.pvm_instance_id, "vm-1");
        assert_eq!(instance.processors, Some(0.5));
        assert_eq!(instance.networks[0].kind.as_deref(), Some("fixed"));
        assert_eq!(instance.creation_date, Some(datetime!(2024-03-01 12:30:00 UTC)));
        assert!(instance.updated_date.is_none());
        assert!(instance.extra.contains_key("srcs"));
    }

    #[test]
    fn listing_without_optional_members() {
        let networks: Networks = serde_json::from_value(json!({
            "networks": [{"networkID": "n1", "name": "public", "vlanID": 10}]
        }))
        .unwrap();
        assert_eq!(networks.networks.len(), 1);
        assert_eq!(networks.networks[0].vlan_id, Some(10.0));
        assert!(networks.networks[0].dns_servers.is_empty());
    }

    #[test]
    fn ssh_key_round_trips_creation_date() {
        let key = SshKey {
            name: "laptop".into(),
            ssh_key: "ssh-rsa AAAA".into(),
            creation_date: Some(datetime!(2023-11-20 08:00:00 UTC)),
        };
        let value = serde_json::to_value(&key).unwrap();
        assert_eq!(value["sshKey"], "ssh-rsa AAAA");
        assert_eq!(value["creationDate"], "2023-11-20T08:00:00Z");
    }
}
