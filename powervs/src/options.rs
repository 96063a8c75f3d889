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

//! Typed options of the most used operations.
//!
//! Required values are constructor arguments, optional ones are set with
//! builder methods. Every options type accepts extra request headers through
//! `header`.
//!
//! ```rust
//! use powervs::options::PvmInstanceCreateOptions;
//! use powervs_core::RequestOptions;
//!
//! let options = PvmInstanceCreateOptions::new("ci-1", "img-1", 4.0, "shared", 0.5, "db01")
//!     .key_pair_name("laptop")
//!     .header("X-Request-Source", "inventory");
//! assert_eq!(options.operation().id, "PcloudPvminstancesPost");
//! ```

use crate::models::IpAddressRange;
use crate::operations;
use powervs_core::operation::Operation;
use powervs_core::params::Params;
use powervs_core::params::RequestOptions;
use serde::Deserialize;
use serde::Serialize;

macro_rules! request_options {
    ($name:ident => $op:path, |$this:ident| $params:expr) => {
        impl $name {
            /// Add a header sent with this request only.
            #[must_use]
            pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.push((name.into(), value.into()));
                self
            }
        }

        impl RequestOptions for $name {
            fn operation(&self) -> &'static Operation {
                &$op
            }

            fn to_params(&self) -> Params {
                let $this = self;
                self.headers
                    .iter()
                    .fold($params, |params, (name, value)| params.header(name, value))
            }
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct ServiceBrokerHealthOptions {
    headers: Vec<(String, String)>,
}

impl ServiceBrokerHealthOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

request_options!(ServiceBrokerHealthOptions => operations::SERVICE_BROKER_HEALTH, |_o| Params::new());

#[derive(Debug, Clone, Default)]
pub struct ServiceBrokerHealthHeadOptions {
    headers: Vec<(String, String)>,
}

impl ServiceBrokerHealthHeadOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

request_options!(ServiceBrokerHealthHeadOptions => operations::SERVICE_BROKER_HEALTH_HEAD, |_o| Params::new());

#[derive(Debug, Clone, Default)]
pub struct ServiceBrokerVersionOptions {
    headers: Vec<(String, String)>,
}

impl ServiceBrokerVersionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

request_options!(ServiceBrokerVersionOptions => operations::SERVICE_BROKER_VERSION, |_o| Params::new());

#[derive(Debug, Clone)]
pub struct CloudInstanceGetOptions {
    pub cloud_instance_id: String,
    headers: Vec<(String, String)>,
}

impl CloudInstanceGetOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(CloudInstanceGetOptions => operations::PCLOUD_CLOUDINSTANCES_GET, |o| {
    Params::new().path("cloud_instance_id", &o.cloud_instance_id)
});

#[derive(Debug, Clone)]
pub struct PvmInstancesGetallOptions {
    pub cloud_instance_id: String,
    headers: Vec<(String, String)>,
}

impl PvmInstancesGetallOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(PvmInstancesGetallOptions => operations::PCLOUD_PVMINSTANCES_GETALL, |o| {
    Params::new().path("cloud_instance_id", &o.cloud_instance_id)
});

#[derive(Debug, Clone)]
pub struct PvmInstanceGetOptions {
    pub cloud_instance_id: String,
    pub pvm_instance_id: String,
    headers: Vec<(String, String)>,
}

impl PvmInstanceGetOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, pvm_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            pvm_instance_id: pvm_instance_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(PvmInstanceGetOptions => operations::PCLOUD_PVMINSTANCES_GET, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("pvm_instance_id", &o.pvm_instance_id)
});

/// Network to attach a new PVM instance to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAttachment {
    #[serde(rename = "networkID")]
    pub network_id: String,
    /// Fixed address; assigned by the network when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl NetworkAttachment {
    #[must_use]
    pub fn new(network_id: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
            ip_address: None,
        }
    }
}

/// Options for creating PVM instances.
#[derive(Debug, Clone)]
pub struct PvmInstanceCreateOptions {
    pub cloud_instance_id: String,
    pub image_id: String,
    /// Memory in GB.
    pub memory: f64,
    /// `dedicated`, `shared` or `capped`.
    pub proc_type: String,
    pub processors: f64,
    pub server_name: String,
    pub key_pair_name: Option<String>,
    pub networks: Vec<NetworkAttachment>,
    pub volume_ids: Vec<String>,
    pub sys_type: Option<String>,
    pub storage_type: Option<String>,
    pub storage_pool: Option<String>,
    pub placement_group: Option<String>,
    pub shared_processor_pool: Option<String>,
    pub pin_policy: Option<String>,
    pub replicants: Option<u32>,
    pub user_data: Option<String>,
    pub skip_host_validation: Option<bool>,
    headers: Vec<(String, String)>,
}

impl PvmInstanceCreateOptions {
    #[must_use]
    pub fn new(
        cloud_instance_id: impl Into<String>,
        image_id: impl Into<String>,
        memory: f64,
        proc_type: impl Into<String>,
        processors: f64,
        server_name: impl Into<String>,
    ) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            image_id: image_id.into(),
            memory,
            proc_type: proc_type.into(),
            processors,
            server_name: server_name.into(),
            key_pair_name: None,
            networks: Vec::new(),
            volume_ids: Vec::new(),
            sys_type: None,
            storage_type: None,
            storage_pool: None,
            placement_group: None,
            shared_processor_pool: None,
            pin_policy: None,
            replicants: None,
            user_data: None,
            skip_host_validation: None,
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn key_pair_name(mut self, name: impl Into<String>) -> Self {
        self.key_pair_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn network(mut self, network: NetworkAttachment) -> Self {
        self.networks.push(network);
        self
    }

    #[must_use]
    pub fn volume_ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.volume_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn sys_type(mut self, sys_type: impl Into<String>) -> Self {
        self.sys_type = Some(sys_type.into());
        self
    }

    #[must_use]
    pub fn storage_type(mut self, storage_type: impl Into<String>) -> Self {
        self.storage_type = Some(storage_type.into());
        self
    }

    #[must_use]
    pub fn storage_pool(mut self, storage_pool: impl Into<String>) -> Self {
        self.storage_pool = Some(storage_pool.into());
        self
    }

    #[must_use]
    pub fn placement_group(mut self, id: impl Into<String>) -> Self {
        self.placement_group = Some(id.into());
        self
    }

    #[must_use]
    pub fn shared_processor_pool(mut self, id: impl Into<String>) -> Self {
        self.shared_processor_pool = Some(id.into());
        self
    }

    #[must_use]
    pub fn pin_policy(mut self, policy: impl Into<String>) -> Self {
        self.pin_policy = Some(policy.into());
        self
    }

    #[must_use]
    pub const fn replicants(mut self, count: u32) -> Self {
        self.replicants = Some(count);
        self
    }

    /// Cloud-init user data, base64 encoded.
    #[must_use]
    pub fn user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = Some(user_data.into());
        self
    }

    #[must_use]
    pub const fn skip_host_validation(mut self, skip: bool) -> Self {
        self.skip_host_validation = Some(skip);
        self
    }
}

request_options!(PvmInstanceCreateOptions => operations::PCLOUD_PVMINSTANCES_POST, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .query_opt("skipHostValidation", o.skip_host_validation)
        .field("imageID", &o.image_id)
        .field("memory", o.memory)
        .field("procType", &o.proc_type)
        .field("processors", o.processors)
        .field("serverName", &o.server_name)
        .field_opt("keyPairName", o.key_pair_name.as_ref())
        .field_opt("networks", (!o.networks.is_empty()).then_some(&o.networks))
        .field_opt("volumeIDs", (!o.volume_ids.is_empty()).then_some(&o.volume_ids))
        .field_opt("sysType", o.sys_type.as_ref())
        .field_opt("storageType", o.storage_type.as_ref())
        .field_opt("storagePool", o.storage_pool.as_ref())
        .field_opt("placementGroup", o.placement_group.as_ref())
        .field_opt("sharedProcessorPool", o.shared_processor_pool.as_ref())
        .field_opt("pinPolicy", o.pin_policy.as_ref())
        .field_opt("replicants", o.replicants)
        .field_opt("userData", o.user_data.as_ref())
});

/// Options for updating a PVM instance. Unset members are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct PvmInstanceUpdateOptions {
    pub cloud_instance_id: String,
    pub pvm_instance_id: String,
    pub server_name: Option<String>,
    pub memory: Option<f64>,
    pub processors: Option<f64>,
    pub proc_type: Option<String>,
    pub pin_policy: Option<String>,
    pub migratable: Option<bool>,
    pub sap_profile_id: Option<String>,
    headers: Vec<(String, String)>,
}

impl PvmInstanceUpdateOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, pvm_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            pvm_instance_id: pvm_instance_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn memory(mut self, memory: f64) -> Self {
        self.memory = Some(memory);
        self
    }

    #[must_use]
    pub const fn processors(mut self, processors: f64) -> Self {
        self.processors = Some(processors);
        self
    }

    #[must_use]
    pub fn proc_type(mut self, proc_type: impl Into<String>) -> Self {
        self.proc_type = Some(proc_type.into());
        self
    }

    #[must_use]
    pub fn pin_policy(mut self, policy: impl Into<String>) -> Self {
        self.pin_policy = Some(policy.into());
        self
    }

    #[must_use]
    pub const fn migratable(mut self, migratable: bool) -> Self {
        self.migratable = Some(migratable);
        self
    }

    #[must_use]
    pub fn sap_profile_id(mut self, id: impl Into<String>) -> Self {
        self.sap_profile_id = Some(id.into());
        self
    }
}

request_options!(PvmInstanceUpdateOptions => operations::PCLOUD_PVMINSTANCES_PUT, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("pvm_instance_id", &o.pvm_instance_id)
        .field_opt("serverName", o.server_name.as_ref())
        .field_opt("memory", o.memory)
        .field_opt("processors", o.processors)
        .field_opt("procType", o.proc_type.as_ref())
        .field_opt("pinPolicy", o.pin_policy.as_ref())
        .field_opt("migratable", o.migratable)
        .field_opt("sapProfileID", o.sap_profile_id.as_ref())
});

#[derive(Debug, Clone)]
pub struct PvmInstanceDeleteOptions {
    pub cloud_instance_id: String,
    pub pvm_instance_id: String,
    pub delete_data_volumes: Option<bool>,
    headers: Vec<(String, String)>,
}

impl PvmInstanceDeleteOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, pvm_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            pvm_instance_id: pvm_instance_id.into(),
            delete_data_volumes: None,
            headers: Vec::new(),
        }
    }

    /// Also delete the attached data volumes.
    #[must_use]
    pub const fn delete_data_volumes(mut self, delete: bool) -> Self {
        self.delete_data_volumes = Some(delete);
        self
    }
}

request_options!(PvmInstanceDeleteOptions => operations::PCLOUD_PVMINSTANCES_DELETE, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("pvm_instance_id", &o.pvm_instance_id)
        .query_opt("delete_data_volumes", o.delete_data_volumes)
});

#[derive(Debug, Clone)]
pub struct PvmInstanceActionOptions {
    pub cloud_instance_id: String,
    pub pvm_instance_id: String,
    /// `start`, `stop`, `immediate-shutdown`, `hard-reboot`, `soft-reboot` or `reset-state`.
    pub action: String,
    headers: Vec<(String, String)>,
}

impl PvmInstanceActionOptions {
    #[must_use]
    pub fn new(
        cloud_instance_id: impl Into<String>,
        pvm_instance_id: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            pvm_instance_id: pvm_instance_id.into(),
            action: action.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(PvmInstanceActionOptions => operations::PCLOUD_PVMINSTANCES_ACTION_POST, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("pvm_instance_id", &o.pvm_instance_id)
        .field("action", &o.action)
});

#[derive(Debug, Clone)]
pub struct NetworksGetallOptions {
    pub cloud_instance_id: String,
    /// e.g. `type:vlan`.
    pub filter: Option<String>,
    headers: Vec<(String, String)>,
}

impl NetworksGetallOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            filter: None,
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

request_options!(NetworksGetallOptions => operations::PCLOUD_NETWORKS_GETALL, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .query_opt("filter", o.filter.as_ref())
});

#[derive(Debug, Clone)]
pub struct NetworkGetOptions {
    pub cloud_instance_id: String,
    pub network_id: String,
    headers: Vec<(String, String)>,
}

impl NetworkGetOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, network_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            network_id: network_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(NetworkGetOptions => operations::PCLOUD_NETWORKS_GET, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("network_id", &o.network_id)
});

#[derive(Debug, Clone)]
pub struct NetworkCreateOptions {
    pub cloud_instance_id: String,
    /// `vlan`, `pub-vlan` or `dhcp-vlan`.
    pub kind: String,
    pub name: Option<String>,
    pub cidr: Option<String>,
    pub gateway: Option<String>,
    pub dns_servers: Vec<String>,
    pub ip_address_ranges: Vec<IpAddressRange>,
    pub jumbo: Option<bool>,
    headers: Vec<(String, String)>,
}

impl NetworkCreateOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            kind: kind.into(),
            name: None,
            cidr: None,
            gateway: None,
            dns_servers: Vec::new(),
            ip_address_ranges: Vec::new(),
            jumbo: None,
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn cidr(mut self, cidr: impl Into<String>) -> Self {
        self.cidr = Some(cidr.into());
        self
    }

    #[must_use]
    pub fn gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway = Some(gateway.into());
        self
    }

    #[must_use]
    pub fn dns_servers(mut self, servers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.dns_servers = servers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn ip_address_range(mut self, range: IpAddressRange) -> Self {
        self.ip_address_ranges.push(range);
        self
    }

    #[must_use]
    pub const fn jumbo(mut self, jumbo: bool) -> Self {
        self.jumbo = Some(jumbo);
        self
    }
}

request_options!(NetworkCreateOptions => operations::PCLOUD_NETWORKS_POST, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .field("type", &o.kind)
        .field_opt("name", o.name.as_ref())
        .field_opt("cidr", o.cidr.as_ref())
        .field_opt("gateway", o.gateway.as_ref())
        .field_opt("dnsServers", (!o.dns_servers.is_empty()).then_some(&o.dns_servers))
        .field_opt(
            "ipAddressRanges",
            (!o.ip_address_ranges.is_empty()).then_some(&o.ip_address_ranges),
        )
        .field_opt("jumbo", o.jumbo)
});

#[derive(Debug, Clone)]
pub struct NetworkDeleteOptions {
    pub cloud_instance_id: String,
    pub network_id: String,
    headers: Vec<(String, String)>,
}

impl NetworkDeleteOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, network_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            network_id: network_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(NetworkDeleteOptions => operations::PCLOUD_NETWORKS_DELETE, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("network_id", &o.network_id)
});

#[derive(Debug, Clone, Default)]
pub struct VolumesGetallOptions {
    pub cloud_instance_id: String,
    pub replication_enabled: Option<bool>,
    pub affinity: Option<String>,
    pub auxiliary: Option<bool>,
    headers: Vec<(String, String)>,
}

impl VolumesGetallOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn replication_enabled(mut self, enabled: bool) -> Self {
        self.replication_enabled = Some(enabled);
        self
    }

    /// Only volumes usable with the given volume for affinity.
    #[must_use]
    pub fn affinity(mut self, volume: impl Into<String>) -> Self {
        self.affinity = Some(volume.into());
        self
    }

    #[must_use]
    pub const fn auxiliary(mut self, auxiliary: bool) -> Self {
        self.auxiliary = Some(auxiliary);
        self
    }
}

request_options!(VolumesGetallOptions => operations::PCLOUD_CLOUDINSTANCES_VOLUMES_GETALL, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .query_opt("replicationEnabled", o.replication_enabled)
        .query_opt("affinity", o.affinity.as_ref())
        .query_opt("auxiliary", o.auxiliary)
});

#[derive(Debug, Clone)]
pub struct VolumeGetOptions {
    pub cloud_instance_id: String,
    pub volume_id: String,
    headers: Vec<(String, String)>,
}

impl VolumeGetOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, volume_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            volume_id: volume_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(VolumeGetOptions => operations::PCLOUD_CLOUDINSTANCES_VOLUMES_GET, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("volume_id", &o.volume_id)
});

#[derive(Debug, Clone, Default)]
pub struct VolumeCreateOptions {
    pub cloud_instance_id: String,
    pub name: String,
    /// Size in GB.
    pub size: f64,
    pub disk_type: Option<String>,
    pub shareable: Option<bool>,
    pub replication_enabled: Option<bool>,
    pub volume_pool: Option<String>,
    /// `affinity` or `anti-affinity`.
    pub affinity_policy: Option<String>,
    pub affinity_pvm_instance: Option<String>,
    pub affinity_volume: Option<String>,
    pub anti_affinity_pvm_instances: Vec<String>,
    pub anti_affinity_volumes: Vec<String>,
    headers: Vec<(String, String)>,
}

impl VolumeCreateOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, name: impl Into<String>, size: f64) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            name: name.into(),
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn disk_type(mut self, disk_type: impl Into<String>) -> Self {
        self.disk_type = Some(disk_type.into());
        self
    }

    #[must_use]
    pub const fn shareable(mut self, shareable: bool) -> Self {
        self.shareable = Some(shareable);
        self
    }

    #[must_use]
    pub const fn replication_enabled(mut self, enabled: bool) -> Self {
        self.replication_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn volume_pool(mut self, pool: impl Into<String>) -> Self {
        self.volume_pool = Some(pool.into());
        self
    }

    /// Place the volume on the same storage as `volume_id`.
    #[must_use]
    pub fn affinity_volume(mut self, volume_id: impl Into<String>) -> Self {
        self.affinity_policy = Some("affinity".into());
        self.affinity_volume = Some(volume_id.into());
        self
    }

    /// Place the volume on the same storage as the volumes of `pvm_instance_id`.
    #[must_use]
    pub fn affinity_pvm_instance(mut self, pvm_instance_id: impl Into<String>) -> Self {
        self.affinity_policy = Some("affinity".into());
        self.affinity_pvm_instance = Some(pvm_instance_id.into());
        self
    }

    /// Keep the volume off the storage used by `volume_ids`.
    #[must_use]
    pub fn anti_affinity_volumes(mut self, volume_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.affinity_policy = Some("anti-affinity".into());
        self.anti_affinity_volumes = volume_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Keep the volume off the storage used by the volumes of `pvm_instance_ids`.
    #[must_use]
    pub fn anti_affinity_pvm_instances(
        mut self,
        pvm_instance_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.affinity_policy = Some("anti-affinity".into());
        self.anti_affinity_pvm_instances = pvm_instance_ids.into_iter().map(Into::into).collect();
        self
    }
}

request_options!(VolumeCreateOptions => operations::PCLOUD_CLOUDINSTANCES_VOLUMES_POST, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .field("name", &o.name)
        .field("size", o.size)
        .field_opt("diskType", o.disk_type.as_ref())
        .field_opt("shareable", o.shareable)
        .field_opt("replicationEnabled", o.replication_enabled)
        .field_opt("volumePool", o.volume_pool.as_ref())
        .field_opt("affinityPolicy", o.affinity_policy.as_ref())
        .field_opt("affinityPVMInstance", o.affinity_pvm_instance.as_ref())
        .field_opt("affinityVolume", o.affinity_volume.as_ref())
        .field_opt(
            "antiAffinityPVMInstances",
            (!o.anti_affinity_pvm_instances.is_empty()).then_some(&o.anti_affinity_pvm_instances),
        )
        .field_opt(
            "antiAffinityVolumes",
            (!o.anti_affinity_volumes.is_empty()).then_some(&o.anti_affinity_volumes),
        )
});

#[derive(Debug, Clone)]
pub struct VolumeDeleteOptions {
    pub cloud_instance_id: String,
    pub volume_id: String,
    headers: Vec<(String, String)>,
}

impl VolumeDeleteOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, volume_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            volume_id: volume_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(VolumeDeleteOptions => operations::PCLOUD_CLOUDINSTANCES_VOLUMES_DELETE, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("volume_id", &o.volume_id)
});

#[derive(Debug, Clone)]
pub struct PlacementGroupsGetallOptions {
    pub cloud_instance_id: String,
    headers: Vec<(String, String)>,
}

impl PlacementGroupsGetallOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(PlacementGroupsGetallOptions => operations::PCLOUD_PLACEMENTGROUPS_GETALL, |o| {
    Params::new().path("cloud_instance_id", &o.cloud_instance_id)
});

#[derive(Debug, Clone)]
pub struct PlacementGroupCreateOptions {
    pub cloud_instance_id: String,
    pub name: String,
    /// `affinity` or `anti-affinity`.
    pub policy: String,
    headers: Vec<(String, String)>,
}

impl PlacementGroupCreateOptions {
    #[must_use]
    pub fn new(
        cloud_instance_id: impl Into<String>,
        name: impl Into<String>,
        policy: impl Into<String>,
    ) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            name: name.into(),
            policy: policy.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(PlacementGroupCreateOptions => operations::PCLOUD_PLACEMENTGROUPS_POST, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .field("name", &o.name)
        .field("policy", &o.policy)
});

#[derive(Debug, Clone)]
pub struct PlacementGroupDeleteOptions {
    pub cloud_instance_id: String,
    pub placement_group_id: String,
    headers: Vec<(String, String)>,
}

impl PlacementGroupDeleteOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, placement_group_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            placement_group_id: placement_group_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(PlacementGroupDeleteOptions => operations::PCLOUD_PLACEMENTGROUPS_DELETE, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("placement_group_id", &o.placement_group_id)
});

#[derive(Debug, Clone)]
pub struct VpnConnectionsGetallOptions {
    pub cloud_instance_id: String,
    headers: Vec<(String, String)>,
}

impl VpnConnectionsGetallOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(VpnConnectionsGetallOptions => operations::PCLOUD_VPNCONNECTIONS_GETALL, |o| {
    Params::new().path("cloud_instance_id", &o.cloud_instance_id)
});

#[derive(Debug, Clone)]
pub struct VpnConnectionGetOptions {
    pub cloud_instance_id: String,
    pub vpn_connection_id: String,
    headers: Vec<(String, String)>,
}

impl VpnConnectionGetOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>, vpn_connection_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            vpn_connection_id: vpn_connection_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(VpnConnectionGetOptions => operations::PCLOUD_VPNCONNECTIONS_GET, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .path("vpn_connection_id", &o.vpn_connection_id)
});

#[derive(Debug, Clone)]
pub struct SshKeysGetallOptions {
    pub tenant_id: String,
    headers: Vec<(String, String)>,
}

impl SshKeysGetallOptions {
    #[must_use]
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(SshKeysGetallOptions => operations::PCLOUD_TENANTS_SSHKEYS_GETALL, |o| {
    Params::new().path("tenant_id", &o.tenant_id)
});

#[derive(Debug, Clone)]
pub struct SshKeyCreateOptions {
    pub tenant_id: String,
    pub name: String,
    /// Public key in OpenSSH format.
    pub ssh_key: String,
    headers: Vec<(String, String)>,
}

impl SshKeyCreateOptions {
    #[must_use]
    pub fn new(
        tenant_id: impl Into<String>,
        name: impl Into<String>,
        ssh_key: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            name: name.into(),
            ssh_key: ssh_key.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(SshKeyCreateOptions => operations::PCLOUD_TENANTS_SSHKEYS_POST, |o| {
    Params::new()
        .path("tenant_id", &o.tenant_id)
        .field("name", &o.name)
        .field("sshKey", &o.ssh_key)
});

#[derive(Debug, Clone)]
pub struct TaskGetOptions {
    pub task_id: String,
    headers: Vec<(String, String)>,
}

impl TaskGetOptions {
    #[must_use]
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            headers: Vec::new(),
        }
    }
}

request_options!(TaskGetOptions => operations::PCLOUD_TASKS_GET, |o| {
    Params::new().path("task_id", &o.task_id)
});

/// Options for querying events.
///
/// `time` lists events since a point in time; `from_time` and `to_time`
/// bound a window. Values are RFC 3339 timestamps.
#[derive(Debug, Clone, Default)]
pub struct EventsGetqueryOptions {
    pub cloud_instance_id: String,
    pub time: Option<String>,
    pub from_time: Option<String>,
    pub to_time: Option<String>,
    pub accept_language: Option<String>,
    headers: Vec<(String, String)>,
}

impl EventsGetqueryOptions {
    #[must_use]
    pub fn new(cloud_instance_id: impl Into<String>) -> Self {
        Self {
            cloud_instance_id: cloud_instance_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    #[must_use]
    pub fn from_time(mut self, from: impl Into<String>) -> Self {
        self.from_time = Some(from.into());
        self
    }

    #[must_use]
    pub fn to_time(mut self, to: impl Into<String>) -> Self {
        self.to_time = Some(to.into());
        self
    }

    #[must_use]
    pub fn accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = Some(language.into());
        self
    }
}

request_options!(EventsGetqueryOptions => operations::PCLOUD_EVENTS_GETQUERY, |o| {
    Params::new()
        .path("cloud_instance_id", &o.cloud_instance_id)
        .query_opt("time", o.time.as_ref())
        .query_opt("from_time", o.from_time.as_ref())
        .query_opt("to_time", o.to_time.as_ref())
        .header_opt("Accept-Language", o.accept_language.as_ref())
});

#[cfg(test)]
mod tests {
    use super::*;
    use powervs_core::operation::Location;
    use serde_json::json;

    #[test]
    fn create_instance_sends_only_set_members() {
        let options = PvmInstanceCreateOptions::new("ci-1", "img-1", 4.0, "shared", 0.5, "db01")
            .network(NetworkAttachment::new("net-1"))
            .skip_host_validation(true);
        let params = options.to_params();
        let op = options.operation();

        assert!(params.validate(op).is_ok());
        assert_eq!(
            params.encode_body(op).unwrap(),
            Some(json!({
                "imageID": "img-1",
                "memory": 4.0,
                "procType": "shared",
                "processors": 0.5,
                "serverName": "db01",
                "networks": [{"networkID": "net-1"}]
            }))
        );
        assert_eq!(
            params.query_pairs(),
            &[("skipHostValidation".to_owned(), "true".to_owned())]
        );
    }

    #[test]
    fn empty_required_member_fails_validation() {
        let options = SshKeyCreateOptions::new("t-1", "", "ssh-rsa AAAA");
        let err = options.to_params().validate(options.operation()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "PcloudTenantsSshkeysPost: required body parameter 'name' is empty"
        );
    }

    #[test]
    fn caller_headers_ride_along() {
        let options = EventsGetqueryOptions::new("ci-1")
            .from_time("2024-03-01T00:00:00Z")
            .accept_language("fr")
            .header("X-Correlation-ID", "42");
        let params = options.to_params();

        assert!(params.validate(options.operation()).is_ok());
        assert_eq!(
            params.headers(),
            &[
                ("Accept-Language".to_owned(), "fr".to_owned()),
                ("X-Correlation-ID".to_owned(), "42".to_owned()),
            ]
        );
    }

    #[test]
    fn volume_affinity_sets_policy() {
        let options = VolumeCreateOptions::new("ci-1", "data", 20.0).anti_affinity_volumes(["v1", "v2"]);
        let body = options
            .to_params()
            .encode_body(options.operation())
            .unwrap()
            .unwrap();
        assert_eq!(body["affinityPolicy"], "anti-affinity");
        assert_eq!(body["antiAffinityVolumes"], json!(["v1", "v2"]));
        assert!(body.get("affinityVolume").is_none());
    }

    #[test]
    fn every_typed_option_matches_its_operation() {
        let all: Vec<(&'static Operation, Params)> = vec![
            pair(&ServiceBrokerHealthOptions::new()),
            pair(&ServiceBrokerHealthHeadOptions::new()),
            pair(&ServiceBrokerVersionOptions::new()),
            pair(&CloudInstanceGetOptions::new("ci")),
            pair(&PvmInstancesGetallOptions::new("ci")),
            pair(&PvmInstanceGetOptions::new("ci", "vm")),
            pair(&PvmInstanceUpdateOptions::new("ci", "vm").memory(8.0).migratable(true)),
            pair(&PvmInstanceDeleteOptions::new("ci", "vm").delete_data_volumes(true)),
            pair(&PvmInstanceActionOptions::new("ci", "vm", "start")),
            pair(&NetworksGetallOptions::new("ci").filter("type:vlan")),
            pair(&NetworkGetOptions::new("ci", "net")),
            pair(&NetworkCreateOptions::new("ci", "vlan").cidr("10.0.0.0/24").jumbo(true)),
            pair(&NetworkDeleteOptions::new("ci", "net")),
            pair(&VolumesGetallOptions::new("ci").auxiliary(true)),
            pair(&VolumeGetOptions::new("ci", "vol")),
            pair(&VolumeDeleteOptions::new("ci", "vol")),
            pair(&PlacementGroupsGetallOptions::new("ci")),
            pair(&PlacementGroupCreateOptions::new("ci", "pg", "affinity")),
            pair(&PlacementGroupDeleteOptions::new("ci", "pg")),
            pair(&VpnConnectionsGetallOptions::new("ci")),
            pair(&VpnConnectionGetOptions::new("ci", "vpn")),
            pair(&SshKeysGetallOptions::new("t")),
            pair(&TaskGetOptions::new("task")),
        ];
        for (op, params) in all {
            assert!(params.validate(op).is_ok(), "{op}");
            assert!(op.params_in(Location::Path).count() <= 2, "{op}");
        }
    }

    fn pair(options: &impl RequestOptions) -> (&'static Operation, Params) {
        (options.operation(), options.to_params())
    }
}
