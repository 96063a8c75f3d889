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

use crate::models::CloudInstance;
use crate::models::Events;
use crate::models::Health;
use crate::models::Network;
use crate::models::Networks;
use crate::models::Object;
use crate::models::PlacementGroup;
use crate::models::PlacementGroups;
use crate::models::PvmInstance;
use crate::models::PvmInstanceUpdateResponse;
use crate::models::PvmInstances;
use crate::models::SshKey;
use crate::models::SshKeys;
use crate::models::Task;
use crate::models::Version;
use crate::models::Volume;
use crate::models::Volumes;
use crate::models::VpnConnection;
use crate::models::VpnConnections;
use crate::options::CloudInstanceGetOptions;
use crate::options::EventsGetqueryOptions;
use crate::options::NetworkCreateOptions;
use crate::options::NetworkDeleteOptions;
use crate::options::NetworkGetOptions;
use crate::options::NetworksGetallOptions;
use crate::options::PlacementGroupCreateOptions;
use crate::options::PlacementGroupDeleteOptions;
use crate::options::PlacementGroupsGetallOptions;
use crate::options::PvmInstanceActionOptions;
use crate::options::PvmInstanceCreateOptions;
use crate::options::PvmInstanceDeleteOptions;
use crate::options::PvmInstanceGetOptions;
use crate::options::PvmInstanceUpdateOptions;
use crate::options::PvmInstancesGetallOptions;
use crate::options::ServiceBrokerHealthHeadOptions;
use crate::options::ServiceBrokerHealthOptions;
use crate::options::ServiceBrokerVersionOptions;
use crate::options::SshKeyCreateOptions;
use crate::options::SshKeysGetallOptions;
use crate::options::TaskGetOptions;
use crate::options::VolumeCreateOptions;
use crate::options::VolumeDeleteOptions;
use crate::options::VolumeGetOptions;
use crate::options::VolumesGetallOptions;
use crate::options::VpnConnectionGetOptions;
use crate::options::VpnConnectionsGetallOptions;
use crate::DEFAULT_SERVICE_URL;
use crate::SERVICE_NAME;
use crate::SERVICE_VERSION;
use http::HeaderMap;
use powervs_core::auth::Authenticator;
use powervs_core::operation::Operation;
use powervs_core::params::Params;
use powervs_core::retry::RetryPolicy;
use powervs_core::CallResult;
use powervs_core::Empty;
use powervs_core::Error;
use powervs_http::ServiceClient;
use powervs_http::Transport;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[cfg(feature = "reqwest")]
use powervs_http::config::ServiceProperties;
#[cfg(feature = "reqwest")]
use powervs_http::reqwest::Client;
#[cfg(feature = "reqwest")]
use powervs_http::reqwest::ClientParams;

/// What [`PowervsV1::new`] is built from.
pub struct PowervsV1Options<T, A> {
    pub transport: T,
    pub authenticator: A,
    /// Base URL; [`DEFAULT_SERVICE_URL`] when `None`.
    pub url: Option<String>,
}

impl<T, A> PowervsV1Options<T, A> {
    #[must_use]
    pub const fn new(transport: T, authenticator: A) -> Self {
        Self {
            transport,
            authenticator,
            url: None,
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Power Cloud service client.
///
/// Calls take `&self`; share one client between tasks with an `Arc`.
pub struct PowervsV1<T, A> {
    client: ServiceClient<T, A>,
}

impl<T: Transport, A: Authenticator> PowervsV1<T, A> {
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is not a usable base URL.
    pub fn new(options: PowervsV1Options<T, A>) -> Result<Self, Error> {
        let url = options.url.as_deref().unwrap_or(DEFAULT_SERVICE_URL);
        let client = ServiceClient::new(options.transport, options.authenticator, url)?
            .with_service(SERVICE_NAME, SERVICE_VERSION);
        Ok(Self { client })
    }

    /// # Errors
    ///
    /// Returns [`Error::Config`] if `url` is not a usable base URL.
    pub fn set_service_url(&mut self, url: &str) -> Result<(), Error> {
        self.client.set_service_url(url)
    }

    #[must_use]
    pub fn service_url(&self) -> &str {
        self.client.service_url().as_str()
    }

    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.client.set_default_headers(headers);
    }

    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.client.enable_retries(max_retries, max_interval);
    }

    pub fn enable_retries_with(&mut self, policy: RetryPolicy) {
        self.client.enable_retries_with(policy);
    }

    pub fn disable_retries(&mut self) {
        self.client.disable_retries();
    }

    /// Underlying executor.
    #[must_use]
    pub const fn client(&self) -> &ServiceClient<T, A> {
        &self.client
    }

    /// Execute any catalog operation.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn call<R: DeserializeOwned>(&self, op: &Operation, params: &Params) -> CallResult<R> {
        self.client.invoke(op, params).await
    }

    /// Health of the service broker.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn service_broker_health(&self, options: &ServiceBrokerHealthOptions) -> CallResult<Health> {
        self.client.invoke_options(options).await
    }

    /// Same as [`Self::service_broker_health`], without a body.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn service_broker_health_head(
        &self,
        options: &ServiceBrokerHealthHeadOptions,
    ) -> CallResult<Empty> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn service_broker_version(&self, options: &ServiceBrokerVersionOptions) -> CallResult<Version> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_cloudinstances_get(
        &self,
        options: &CloudInstanceGetOptions,
    ) -> CallResult<CloudInstance> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_pvminstances_getall(
        &self,
        options: &PvmInstancesGetallOptions,
    ) -> CallResult<PvmInstances> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_pvminstances_get(&self, options: &PvmInstanceGetOptions) -> CallResult<PvmInstance> {
        self.client.invoke_options(options).await
    }

    /// Create one or more PVM instances (more than one with `replicants`).
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_pvminstances_post(
        &self,
        options: &PvmInstanceCreateOptions,
    ) -> CallResult<Vec<PvmInstance>> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_pvminstances_put(
        &self,
        options: &PvmInstanceUpdateOptions,
    ) -> CallResult<PvmInstanceUpdateResponse> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_pvminstances_delete(&self, options: &PvmInstanceDeleteOptions) -> CallResult<Object> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_pvminstances_action_post(
        &self,
        options: &PvmInstanceActionOptions,
    ) -> CallResult<Object> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_networks_getall(&self, options: &NetworksGetallOptions) -> CallResult<Networks> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_networks_get(&self, options: &NetworkGetOptions) -> CallResult<Network> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_networks_post(&self, options: &NetworkCreateOptions) -> CallResult<Network> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_networks_delete(&self, options: &NetworkDeleteOptions) -> CallResult<Object> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_cloudinstances_volumes_getall(
        &self,
        options: &VolumesGetallOptions,
    ) -> CallResult<Volumes> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_cloudinstances_volumes_get(&self, options: &VolumeGetOptions) -> CallResult<Volume> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_cloudinstances_volumes_post(
        &self,
        options: &VolumeCreateOptions,
    ) -> CallResult<Volume> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_cloudinstances_volumes_delete(
        &self,
        options: &VolumeDeleteOptions,
    ) -> CallResult<Object> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_placementgroups_getall(
        &self,
        options: &PlacementGroupsGetallOptions,
    ) -> CallResult<PlacementGroups> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_placementgroups_post(
        &self,
        options: &PlacementGroupCreateOptions,
    ) -> CallResult<PlacementGroup> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_placementgroups_delete(
        &self,
        options: &PlacementGroupDeleteOptions,
    ) -> CallResult<Object> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_vpnconnections_getall(
        &self,
        options: &VpnConnectionsGetallOptions,
    ) -> CallResult<VpnConnections> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_vpnconnections_get(
        &self,
        options: &VpnConnectionGetOptions,
    ) -> CallResult<VpnConnection> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_tenants_sshkeys_getall(&self, options: &SshKeysGetallOptions) -> CallResult<SshKeys> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_tenants_sshkeys_post(&self, options: &SshKeyCreateOptions) -> CallResult<SshKey> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_tasks_get(&self, options: &TaskGetOptions) -> CallResult<Task> {
        self.client.invoke_options(options).await
    }

    /// # Errors
    ///
    /// See [`ServiceClient::invoke`].
    pub async fn pcloud_events_getquery(&self, options: &EventsGetqueryOptions) -> CallResult<Events> {
        self.client.invoke_options(options).await
    }
}

#[cfg(feature = "reqwest")]
impl PowervsV1<Client, Box<dyn Authenticator>> {
    /// Client configured from the credentials file or environment of
    /// `service_name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration cannot be loaded or
    /// describes an unusable client.
    pub fn from_external_config(service_name: &str) -> Result<Self, Error> {
        let properties = ServiceProperties::load(service_name)?;
        Self::from_properties(&properties)
    }

    /// Client configured from already loaded properties.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the properties describe an unusable client.
    pub fn from_properties(properties: &ServiceProperties) -> Result<Self, Error> {
        let transport = Client::with_params(ClientParams::from(properties))
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;
        let authenticator = properties.authenticator()?;
        let auth_type = authenticator.auth_type();

        let mut options = PowervsV1Options::new(transport, authenticator);
        options.url.clone_from(&properties.url);
        let mut service = Self::new(options)?;
        if let Some(policy) = properties.retry_policy() {
            service.enable_retries_with(policy);
        }
        tracing::debug!(
            url = service.service_url(),
            auth_type,
            retries = service.client.retry_policy().map(RetryPolicy::max_retries),
            "configured service client"
        );
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powervs_core::auth::NoAuthAuthenticator;
    use powervs_mock::Expect;
    use powervs_mock::MockTransport;
    use powervs_mock::Reply;
    use serde_json::json;
    use std::sync::Arc;

    fn service(transport: &Arc<MockTransport>) -> PowervsV1<Arc<MockTransport>, NoAuthAuthenticator> {
        PowervsV1::new(
            PowervsV1Options::new(transport.clone(), NoAuthAuthenticator).url("https://us-south.power-iaas.cloud.ibm.com"),
        )
        .unwrap()
    }

    #[test]
    fn default_url() {
        let service = PowervsV1::new(PowervsV1Options::new(MockTransport::new(), NoAuthAuthenticator)).unwrap();
        assert_eq!(service.service_url(), "https://power-iaas.cloud.ibm.com/");
    }

    #[tokio::test]
    async fn typed_get_decodes_model() {
        let transport = Arc::new(MockTransport::new());
        transport.push(Expect::get(
            "/pcloud/v1/cloud-instances/ci-1/pvm-instances/vm-1",
            Reply::status(200).json(json!({
                "pvmInstanceID": "vm-1",
                "serverName": "db01",
                "status": "ACTIVE"
            })),
        ));

        let (instance, response) = service(&transport)
            .pcloud_pvminstances_get(&PvmInstanceGetOptions::new("ci-1", "vm-1"))
            .await
            .unwrap();
        assert_eq!(instance.server_name, "db01");
        assert_eq!(response.status_code(), 200);

        let request = transport.last_request().unwrap();
        assert_eq!(request.headers["id"], "pcloud.pvminstances.get");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn typed_post_sends_json_body() {
        let transport = Arc::new(MockTransport::new());
        transport.push(Expect::post(
            "/pcloud/v1/cloud-instances/ci-1/placement-groups",
            Reply::status(200).json(json!({"id": "pg-1", "name": "web", "policy": "anti-affinity"})),
        ));

        let options = PlacementGroupCreateOptions::new("ci-1", "web", "anti-affinity");
        let (group, _) = service(&transport).pcloud_placementgroups_post(&options).await.unwrap();
        assert_eq!(group.id, "pg-1");

        let request = transport.last_request().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(body, json!({"name": "web", "policy": "anti-affinity"}));
        assert_eq!(request.headers["content-type"], "application/json");
    }

    #[tokio::test]
    async fn head_accepts_empty_body() {
        let transport = Arc::new(MockTransport::new());
        transport.push(Expect::head("/broker/v1/health", Reply::status(200)));

        let (_, response) = service(&transport)
            .service_broker_health_head(&ServiceBrokerHealthHeadOptions::new())
            .await
            .unwrap();
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn delete_with_query_flag() {
        let transport = Arc::new(MockTransport::new());
        transport.push(Expect::delete(
            "/pcloud/v1/cloud-instances/ci-1/pvm-instances/vm-1",
            Reply::status(200).json(json!({})),
        ));

        let options = PvmInstanceDeleteOptions::new("ci-1", "vm-1").delete_data_volumes(true);
        service(&transport).pcloud_pvminstances_delete(&options).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.query(), Some("delete_data_volumes=true"));
    }

    #[tokio::test]
    async fn generic_call_reaches_any_operation() {
        let transport = Arc::new(MockTransport::new());
        transport.push(Expect::get(
            "/pcloud/v1/cloud-instances/ci-1/system-pools",
            Reply::status(200).json(json!({"s922": {"type": "s922"}})),
        ));

        let params = Params::new().path("cloud_instance_id", "ci-1");
        let (pools, _) = service(&transport)
            .call::<serde_json::Value>(&crate::operations::PCLOUD_SYSTEMPOOLS_GET, &params)
            .await
            .unwrap();
        assert_eq!(pools["s922"]["type"], "s922");
    }
}
