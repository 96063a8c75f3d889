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

//! Catalog of every Power Cloud REST operation.
//!
//! Each descriptor is plain `'static` data interpreted by
//! [`ServiceClient::invoke`](powervs_http::ServiceClient::invoke). Path
//! placeholders and path parameters use `snake_case`; body members use the
//! wire names of the Power Cloud API.

use powervs_core::operation::Method;
use powervs_core::operation::Operation;
use powervs_core::operation::Param;

/// Returns an accessToken (and set cookie).
pub static SERVICE_BROKER_AUTH_CALLBACK: Operation = Operation {
    id: "ServiceBrokerAuthCallback",
    method: Method::Get,
    path: "/auth/v1/callback",
    params: &[],
    success: 200,
    body: false,
};

/// Associates the user with a tenant and returns an accessToken.
pub static SERVICE_BROKER_AUTH_REGISTRATION_CALLBACK: Operation = Operation {
    id: "ServiceBrokerAuthRegistrationCallback",
    method: Method::Get,
    path: "/auth/v1/callback-registration",
    params: &[],
    success: 200,
    body: false,
};

/// Request a authorization device code.
pub static SERVICE_BROKER_AUTH_DEVICE_CODE_POST: Operation = Operation {
    id: "ServiceBrokerAuthDeviceCodePost",
    method: Method::Post,
    path: "/auth/v1/device/code",
    params: &[],
    success: 200,
    body: false,
};

/// Poll for authorization device token.
pub static SERVICE_BROKER_AUTH_DEVICE_TOKEN_POST: Operation = Operation {
    id: "ServiceBrokerAuthDeviceTokenPost",
    method: Method::Post,
    path: "/auth/v1/device/token",
    params: &[Param::body("deviceCode").required()],
    success: 200,
    body: true,
};

/// Information about current access token.
pub static SERVICE_BROKER_AUTH_INFO_TOKEN: Operation = Operation {
    id: "ServiceBrokerAuthInfoToken",
    method: Method::Get,
    path: "/auth/v1/info/token",
    params: &[],
    success: 200,
    body: false,
};

/// Information about current user.
pub static SERVICE_BROKER_AUTH_INFO_USER: Operation = Operation {
    id: "ServiceBrokerAuthInfoUser",
    method: Method::Get,
    path: "/auth/v1/info/user",
    params: &[],
    success: 200,
    body: false,
};

/// Login.
pub static SERVICE_BROKER_AUTH_LOGIN: Operation = Operation {
    id: "ServiceBrokerAuthLogin",
    method: Method::Get,
    path: "/auth/v1/login",
    params: &[Param::query("user_id"), Param::query("redirect_url"), Param::query("access_type")],
    success: 200,
    body: false,
};

/// Logout.
pub static SERVICE_BROKER_AUTH_LOGOUT: Operation = Operation {
    id: "ServiceBrokerAuthLogout",
    method: Method::Get,
    path: "/auth/v1/logout",
    params: &[],
    success: 200,
    body: false,
};

/// Registration of a new Tenant and Login.
pub static SERVICE_BROKER_AUTH_REGISTRATION: Operation = Operation {
    id: "ServiceBrokerAuthRegistration",
    method: Method::Get,
    path: "/auth/v1/registration",
    params: &[
        Param::query("tenant_id").required(),
        Param::query("entitlement_id").required(),
        Param::query("plan").required(),
        Param::query("icn"),
        Param::query("regions"),
        Param::query("redirect_url"),
    ],
    success: 200,
    body: false,
};

/// Request a new token from a refresh token.
pub static SERVICE_BROKER_AUTH_TOKEN_POST: Operation = Operation {
    id: "ServiceBrokerAuthTokenPost",
    method: Method::Post,
    path: "/auth/v1/token",
    params: &[Param::body("refreshToken").required(), Param::body("source")],
    success: 200,
    body: true,
};

/// Get the current state information associated with the service instance.
pub static BLUEMIX_SERVICE_INSTANCE_GET: Operation = Operation {
    id: "BluemixServiceInstanceGet",
    method: Method::Get,
    path: "/bluemix_v1/service_instances/{instance_id}",
    params: &[Param::path("instance_id")],
    success: 200,
    body: false,
};

/// Update (disable or enable) the state of a provisioned service instance.
pub static BLUEMIX_SERVICE_INSTANCE_PUT: Operation = Operation {
    id: "BluemixServiceInstancePut",
    method: Method::Put,
    path: "/bluemix_v1/service_instances/{instance_id}",
    params: &[
        Param::path("instance_id"),
        Param::body("enabled").required(),
        Param::body("initiator_id"),
        Param::body("reason_code"),
    ],
    success: 200,
    body: true,
};

/// get the catalog of services that the service broker offers.
pub static CATALOG_GET: Operation = Operation {
    id: "CatalogGet",
    method: Method::Get,
    path: "/v2/catalog",
    params: &[Param::header("X-Broker-API-Version").required()],
    success: 200,
    body: false,
};

/// Available hardware statistics and limits.
pub static SERVICE_BROKER_HARDWAREPLATFORMS_GET: Operation = Operation {
    id: "ServiceBrokerHardwareplatformsGet",
    method: Method::Get,
    path: "/broker/v1/hardware-platforms",
    params: &[Param::query("regionZone")],
    success: 200,
    body: false,
};

/// Get current server health.
pub static SERVICE_BROKER_HEALTH_HEAD: Operation = Operation {
    id: "ServiceBrokerHealthHead",
    method: Method::Head,
    path: "/broker/v1/health",
    params: &[],
    success: 200,
    body: false,
};

/// Get current server health.
pub static SERVICE_BROKER_HEALTH: Operation = Operation {
    id: "ServiceBrokerHealth",
    method: Method::Get,
    path: "/broker/v1/health",
    params: &[],
    success: 200,
    body: false,
};

/// Get current server version.
pub static SERVICE_BROKER_TEST_TIMEOUT: Operation = Operation {
    id: "ServiceBrokerTestTimeout",
    method: Method::Get,
    path: "/broker/v1/test/timeout",
    params: &[Param::query("t").required()],
    success: 200,
    body: false,
};

/// Get current server version.
pub static SERVICE_BROKER_VERSION: Operation = Operation {
    id: "ServiceBrokerVersion",
    method: Method::Get,
    path: "/broker/v1/version",
    params: &[],
    success: 200,
    body: false,
};

/// Get List of PowerVS Cloud Instances.
pub static INTERNAL_V1_POWERVS_INSTANCES_GET: Operation = Operation {
    id: "InternalV1PowervsInstancesGet",
    method: Method::Get,
    path: "/internal/v1/powervs/instances",
    params: &[Param::query("powervs_location").required()],
    success: 200,
    body: false,
};

/// Get List of PER enabled PowerVS Locations.
pub static INTERNAL_V1_POWERVS_LOCATIONS_TRANSITGATEWAY_GET: Operation = Operation {
    id: "InternalV1PowervsLocationsTransitgatewayGet",
    method: Method::Get,
    path: "/internal/v1/powervs/locations/transit-gateway",
    params: &[],
    success: 200,
    body: false,
};

/// Get the current storage pools settings for a region-zone.
pub static INTERNAL_V1_STORAGE_REGIONS_STORAGE_POOLS_GETALL: Operation = Operation {
    id: "InternalV1StorageRegionsStoragePoolsGetall",
    method: Method::Get,
    path: "/internal/v1/storage/regions/{region_zone_id}/storage-pools",
    params: &[Param::path("region_zone_id")],
    success: 200,
    body: false,
};

/// Get the settings for given pool name.
pub static INTERNAL_V1_STORAGE_REGIONS_STORAGE_POOLS_GET: Operation = Operation {
    id: "InternalV1StorageRegionsStoragePoolsGet",
    method: Method::Get,
    path: "/internal/v1/storage/regions/{region_zone_id}/storage-pools/{storage_pool_name}",
    params: &[Param::path("region_zone_id"), Param::path("storage_pool_name")],
    success: 200,
    body: false,
};

/// Update the settings for given pool name.
pub static INTERNAL_V1_STORAGE_REGIONS_STORAGE_POOLS_PUT: Operation = Operation {
    id: "InternalV1StorageRegionsStoragePoolsPut",
    method: Method::Put,
    path: "/internal/v1/storage/regions/{region_zone_id}/storage-pools/{storage_pool_name}",
    params: &[
        Param::path("region_zone_id"),
        Param::path("storage_pool_name"),
        Param::body("displayName"),
        Param::body("drEnabled"),
        Param::body("overrideThresholds"),
        Param::body("state"),
    ],
    success: 200,
    body: true,
};

/// Get the current default threshold settings for a region-zone.
pub static INTERNAL_V1_STORAGE_REGIONS_THRESHOLDS_GET: Operation = Operation {
    id: "InternalV1StorageRegionsThresholdsGet",
    method: Method::Get,
    path: "/internal/v1/storage/regions/{region_zone_id}/thresholds",
    params: &[Param::path("region_zone_id")],
    success: 200,
    body: false,
};

/// Update a default threshold setting for a region-zone.
pub static INTERNAL_V1_STORAGE_REGIONS_THRESHOLDS_PUT: Operation = Operation {
    id: "InternalV1StorageRegionsThresholdsPut",
    method: Method::Put,
    path: "/internal/v1/storage/regions/{region_zone_id}/thresholds",
    params: &[
        Param::path("region_zone_id"),
        Param::body("capacity"),
        Param::body("overcommit"),
        Param::body("physicalCapacity"),
        Param::body("vdiskCapacity"),
        Param::body("vdiskLimit"),
    ],
    success: 202,
    body: true,
};

/// Get the Cloud Instance Transit Gateway information.
pub static INTERNAL_V1_TRANSITGATEWAY_GET: Operation = Operation {
    id: "InternalV1TransitgatewayGet",
    method: Method::Get,
    path: "/internal/v1/transit-gateway/{powervs_service_crn}",
    params: &[
        Param::path("powervs_service_crn"),
        Param::header("IBM-UserAuthorization").required(),
    ],
    success: 200,
    body: false,
};

/// List all OpenStack instances being managed.
pub static SERVICE_BROKER_OPENSTACKS_GET: Operation = Operation {
    id: "ServiceBrokerOpenstacksGet",
    method: Method::Get,
    path: "/broker/v1/openstacks",
    params: &[],
    success: 200,
    body: false,
};

/// Create a new OpenStack instance to be managed.
pub static SERVICE_BROKER_OPENSTACKS_POST: Operation = Operation {
    id: "ServiceBrokerOpenstacksPost",
    method: Method::Post,
    path: "/broker/v1/openstacks",
    params: &[
        Param::body("ipAddress").required(),
        Param::body("name").required(),
        Param::body("region").required(),
    ],
    success: 200,
    body: true,
};

/// List account information for all pvm instances on hostname.
pub static SERVICE_BROKER_OPENSTACKS_OPENSTACK_GET: Operation = Operation {
    id: "ServiceBrokerOpenstacksOpenstackGet",
    method: Method::Get,
    path: "/broker/v1/openstacks/{openstack_id}",
    params: &[Param::path("openstack_id")],
    success: 200,
    body: false,
};

/// List account information for all pvm instances on hostname.
pub static SERVICE_BROKER_OPENSTACKS_HOSTS_GET: Operation = Operation {
    id: "ServiceBrokerOpenstacksHostsGet",
    method: Method::Get,
    path: "/broker/v1/openstacks/{openstack_id}/hosts/{hostname}",
    params: &[Param::path("openstack_id"), Param::path("hostname")],
    success: 200,
    body: false,
};

/// List account information for a pvm instance.
pub static SERVICE_BROKER_OPENSTACKS_SERVERS_GET: Operation = Operation {
    id: "ServiceBrokerOpenstacksServersGet",
    method: Method::Get,
    path: "/broker/v1/openstacks/{openstack_id}/servers/{pvm_instance_id}",
    params: &[Param::path("openstack_id"), Param::path("pvm_instance_id")],
    success: 200,
    body: false,
};

/// Get all cloud connections in this cloud instance.
pub static PCLOUD_CLOUDCONNECTIONS_GETALL: Operation = Operation {
    id: "PcloudCloudconnectionsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cloud-connections",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create a new cloud connection.
pub static PCLOUD_CLOUDCONNECTIONS_POST: Operation = Operation {
    id: "PcloudCloudconnectionsPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cloud-connections",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("name").required(),
        Param::body("speed").required(),
        Param::body("classic"),
        Param::body("globalRouting"),
        Param::body("metered"),
        Param::body("subnets"),
        Param::body("transitEnabled"),
        Param::body("vpc"),
    ],
    success: 200,
    body: true,
};

/// Get all virtual private cloud connections in this cloud instance.
pub static PCLOUD_CLOUDCONNECTIONS_VIRTUALPRIVATECLOUDS_GETALL: Operation = Operation {
    id: "PcloudCloudconnectionsVirtualprivatecloudsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cloud-connections-virtual-private-clouds",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Get a cloud connection's state/information.
pub static PCLOUD_CLOUDCONNECTIONS_GET: Operation = Operation {
    id: "PcloudCloudconnectionsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cloud-connections/{cloud_connection_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("cloud_connection_id")],
    success: 200,
    body: false,
};

/// Update a Cloud Connection.
pub static PCLOUD_CLOUDCONNECTIONS_PUT: Operation = Operation {
    id: "PcloudCloudconnectionsPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cloud-connections/{cloud_connection_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("cloud_connection_id"),
        Param::body("classic"),
        Param::body("globalRouting"),
        Param::body("metered"),
        Param::body("name"),
        Param::body("speed"),
        Param::body("vpc"),
    ],
    success: 200,
    body: true,
};

/// Attach a network to the cloud connection.
pub static PCLOUD_CLOUDCONNECTIONS_NETWORKS_PUT: Operation = Operation {
    id: "PcloudCloudconnectionsNetworksPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cloud-connections/{cloud_connection_id}/networks/{network_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("cloud_connection_id"),
        Param::path("network_id"),
    ],
    success: 200,
    body: false,
};

/// Get the disaster recovery site details for the current location.
pub static PCLOUD_LOCATIONS_DISASTERRECOVERY_GET: Operation = Operation {
    id: "PcloudLocationsDisasterrecoveryGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/locations/disaster-recovery",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Get all disaster recovery locations supported by Power Virtual Server.
pub static PCLOUD_LOCATIONS_DISASTERRECOVERY_GETALL: Operation = Operation {
    id: "PcloudLocationsDisasterrecoveryGetall",
    method: Method::Get,
    path: "/pcloud/v1/locations/disaster-recovery",
    params: &[],
    success: 200,
    body: false,
};

/// Get events from this cloud instance since a specific timestamp.
pub static PCLOUD_EVENTS_GETQUERY: Operation = Operation {
    id: "PcloudEventsGetquery",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/events",
    params: &[
        Param::path("cloud_instance_id"),
        Param::header("Accept-Language"),
        Param::query("time"),
        Param::query("from_time"),
        Param::query("to_time"),
    ],
    success: 200,
    body: false,
};

/// Get a single event.
pub static PCLOUD_EVENTS_GET: Operation = Operation {
    id: "PcloudEventsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/events/{event_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("event_id"),
        Param::header("Accept-Language"),
    ],
    success: 200,
    body: false,
};

/// Get detail of last cos-image import job.
pub static PCLOUD_V1_CLOUDINSTANCES_COSIMAGES_GET: Operation = Operation {
    id: "PcloudV1CloudinstancesCosimagesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cos-images",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create an cos-image import job.
pub static PCLOUD_V1_CLOUDINSTANCES_COSIMAGES_POST: Operation = Operation {
    id: "PcloudV1CloudinstancesCosimagesPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cos-images",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("bucketName").required(),
        Param::body("imageFilename").required(),
        Param::body("imageName").required(),
        Param::body("region").required(),
        Param::body("accessKey"),
        Param::body("bucketAccess"),
        Param::body("osType"),
        Param::body("secretKey"),
        Param::body("storageAffinity"),
        Param::body("storagePool"),
        Param::body("storageType"),
    ],
    success: 202,
    body: true,
};

/// List all images for this cloud instance.
pub static PCLOUD_CLOUDINSTANCES_IMAGES_GETALL: Operation = Operation {
    id: "PcloudCloudinstancesImagesGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/images",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create a new Image (from available images).
pub static PCLOUD_CLOUDINSTANCES_IMAGES_POST: Operation = Operation {
    id: "PcloudCloudinstancesImagesPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/images",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("source").required(),
        Param::body("accessKey"),
        Param::body("bucketName"),
        Param::body("diskType"),
        Param::body("imageFilename"),
        Param::body("imageID"),
        Param::body("imageName"),
        Param::body("imagePath"),
        Param::body("osType"),
        Param::body("region"),
        Param::body("secretKey"),
        Param::body("storageAffinity"),
        Param::body("storagePool"),
    ],
    success: 200,
    body: true,
};

/// Detailed info of an image.
pub static PCLOUD_CLOUDINSTANCES_IMAGES_GET: Operation = Operation {
    id: "PcloudCloudinstancesImagesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/images/{image_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("image_id")],
    success: 200,
    body: false,
};

/// Export an image.
pub static PCLOUD_CLOUDINSTANCES_IMAGES_EXPORT_POST: Operation = Operation {
    id: "PcloudCloudinstancesImagesExportPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/images/{image_id}/export",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("image_id"),
        Param::body("accessKey"),
        Param::body("bucketName").required(),
        Param::body("region"),
        Param::body("secretKey"),
    ],
    success: 202,
    body: true,
};

/// List all available stock images.
pub static PCLOUD_CLOUDINSTANCES_STOCKIMAGES_GETALL: Operation = Operation {
    id: "PcloudCloudinstancesStockimagesGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/stock-images",
    params: &[Param::path("cloud_instance_id"), Param::query("sap"), Param::query("vtl")],
    success: 200,
    body: false,
};

/// Detailed info of an available stock image.
pub static PCLOUD_CLOUDINSTANCES_STOCKIMAGES_GET: Operation = Operation {
    id: "PcloudCloudinstancesStockimagesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/stock-images/{image_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("image_id")],
    success: 200,
    body: false,
};

/// List all the images in the image-catalog.
pub static PCLOUD_IMAGES_GETALL: Operation = Operation {
    id: "PcloudImagesGetall",
    method: Method::Get,
    path: "/pcloud/v1/images",
    params: &[Param::query("sap"), Param::query("vtl")],
    success: 200,
    body: false,
};

/// Detailed info of an image in the image-catalog.
pub static PCLOUD_IMAGES_GET: Operation = Operation {
    id: "PcloudImagesGet",
    method: Method::Get,
    path: "/pcloud/v1/images/{image_id}",
    params: &[Param::path("image_id")],
    success: 200,
    body: false,
};

/// Get detail of last image export job.
pub static PCLOUD_V2_IMAGES_EXPORT_GET: Operation = Operation {
    id: "PcloudV2ImagesExportGet",
    method: Method::Get,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/images/{image_id}/export",
    params: &[Param::path("cloud_instance_id"), Param::path("image_id")],
    success: 200,
    body: false,
};

/// Add image export job to the jobs queue.
pub static PCLOUD_V2_IMAGES_EXPORT_POST: Operation = Operation {
    id: "PcloudV2ImagesExportPost",
    method: Method::Post,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/images/{image_id}/export",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("image_id"),
        Param::body("accessKey"),
        Param::body("bucketName").required(),
        Param::body("region"),
        Param::body("secretKey"),
    ],
    success: 202,
    body: true,
};

/// Get a Cloud Instance's current state/information.
pub static PCLOUD_CLOUDINSTANCES_GET: Operation = Operation {
    id: "PcloudCloudinstancesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Update / Upgrade a Cloud Instance.
pub static PCLOUD_CLOUDINSTANCES_PUT: Operation = Operation {
    id: "PcloudCloudinstancesPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("instances"),
        Param::body("memory"),
        Param::body("procUnits"),
        Param::body("processors"),
        Param::body("storage"),
    ],
    success: 200,
    body: true,
};

/// List up to the last 5 jobs initiated by the cloud instance.
pub static PCLOUD_CLOUDINSTANCES_JOBS_GETALL: Operation = Operation {
    id: "PcloudCloudinstancesJobsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/jobs",
    params: &[
        Param::path("cloud_instance_id"),
        Param::query("operation.id"),
        Param::query("operation.target"),
        Param::query("operation.action"),
    ],
    success: 200,
    body: false,
};

/// List the detail of a job.
pub static PCLOUD_CLOUDINSTANCES_JOBS_GET: Operation = Operation {
    id: "PcloudCloudinstancesJobsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/jobs/{job_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("job_id")],
    success: 200,
    body: false,
};

/// Get all networks in this cloud instance.
pub static PCLOUD_NETWORKS_GETALL: Operation = Operation {
    id: "PcloudNetworksGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks",
    params: &[Param::path("cloud_instance_id"), Param::query("filter")],
    success: 200,
    body: false,
};

/// Create a new Network.
pub static PCLOUD_NETWORKS_POST: Operation = Operation {
    id: "PcloudNetworksPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("type").required(),
        Param::body("cidr"),
        Param::body("dnsServers"),
        Param::body("gateway"),
        Param::body("ipAddressRanges"),
        Param::body("jumbo"),
        Param::body("name"),
    ],
    success: 200,
    body: true,
};

/// Get a network's current state/information.
pub static PCLOUD_NETWORKS_GET: Operation = Operation {
    id: "PcloudNetworksGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks/{network_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("network_id")],
    success: 200,
    body: false,
};

/// Update a Network.
pub static PCLOUD_NETWORKS_PUT: Operation = Operation {
    id: "PcloudNetworksPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks/{network_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("network_id"),
        Param::body("dnsServers"),
        Param::body("gateway"),
        Param::body("ipAddressRanges"),
        Param::body("name"),
    ],
    success: 200,
    body: true,
};

/// Get all ports for this network.
pub static PCLOUD_NETWORKS_PORTS_GETALL: Operation = Operation {
    id: "PcloudNetworksPortsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks/{network_id}/ports",
    params: &[Param::path("cloud_instance_id"), Param::path("network_id")],
    success: 200,
    body: false,
};

/// Perform port addition, deletion, and listing.
pub static PCLOUD_NETWORKS_PORTS_POST: Operation = Operation {
    id: "PcloudNetworksPortsPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks/{network_id}/ports",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("network_id"),
        Param::body("description"),
        Param::body("ipAddress"),
    ],
    success: 201,
    body: true,
};

/// Get a port's information.
pub static PCLOUD_NETWORKS_PORTS_GET: Operation = Operation {
    id: "PcloudNetworksPortsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks/{network_id}/ports/{port_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("network_id"),
        Param::path("port_id"),
        Param::header("Accept"),
    ],
    success: 200,
    body: false,
};

/// Update a port's information.
pub static PCLOUD_NETWORKS_PORTS_PUT: Operation = Operation {
    id: "PcloudNetworksPortsPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks/{network_id}/ports/{port_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("network_id"),
        Param::path("port_id"),
        Param::body("description"),
        Param::body("pvmInstanceID"),
    ],
    success: 200,
    body: true,
};

/// Get all the pvm instances for this cloud instance.
pub static PCLOUD_PVMINSTANCES_GETALL: Operation = Operation {
    id: "PcloudPvminstancesGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create a new Power VM Instance.
pub static PCLOUD_PVMINSTANCES_POST: Operation = Operation {
    id: "PcloudPvminstancesPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances",
    params: &[
        Param::path("cloud_instance_id"),
        Param::query("skipHostValidation"),
        Param::body("imageID").required(),
        Param::body("memory").required(),
        Param::body("procType").required(),
        Param::body("processors").required(),
        Param::body("serverName").required(),
        Param::body("deploymentType"),
        Param::body("keyPairName"),
        Param::body("licenseRepositoryCapacity"),
        Param::body("migratable"),
        Param::body("networkIDs"),
        Param::body("networks"),
        Param::body("pinPolicy"),
        Param::body("placementGroup"),
        Param::body("replicantAffinityPolicy"),
        Param::body("replicantNamingScheme"),
        Param::body("replicants"),
        Param::body("sharedProcessorPool"),
        Param::body("softwareLicenses"),
        Param::body("storageAffinity"),
        Param::body("storageConnection"),
        Param::body("storagePool"),
        Param::body("storageType"),
        Param::body("sysType"),
        Param::body("userData"),
        Param::body("virtualCores"),
        Param::body("volumeIDs"),
    ],
    success: 200,
    body: true,
};

/// Get a PVM Instance's current state or information.
pub static PCLOUD_PVMINSTANCES_GET: Operation = Operation {
    id: "PcloudPvminstancesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("pvm_instance_id")],
    success: 200,
    body: false,
};

/// Update a PCloud PVM Instance.
pub static PCLOUD_PVMINSTANCES_PUT: Operation = Operation {
    id: "PcloudPvminstancesPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("licenseRepositoryCapacity"),
        Param::body("memory"),
        Param::body("migratable"),
        Param::body("pinPolicy"),
        Param::body("procType"),
        Param::body("processors"),
        Param::body("sapProfileID"),
        Param::body("serverName"),
        Param::body("softwareLicenses"),
        Param::body("storagePoolAffinity"),
        Param::body("virtualCores"),
    ],
    success: 202,
    body: true,
};

/// Perform an action (start stop reboot immediate-shutdown reset) on a PVMInstance.
pub static PCLOUD_PVMINSTANCES_ACTION_POST: Operation = Operation {
    id: "PcloudPvminstancesActionPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/action",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("action").required(),
    ],
    success: 200,
    body: true,
};

/// Capture a PVMInstance and create a deployable image.
pub static PCLOUD_PVMINSTANCES_CAPTURE_POST: Operation = Operation {
    id: "PcloudPvminstancesCapturePost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/capture",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("captureDestination").required(),
        Param::body("captureName").required(),
        Param::body("captureVolumeIDs"),
        Param::body("cloudStorageAccessKey"),
        Param::body("cloudStorageImagePath"),
        Param::body("cloudStorageRegion"),
        Param::body("cloudStorageSecretKey"),
    ],
    success: 200,
    body: true,
};

/// Clone a PVMInstance.
pub static PCLOUD_PVMINSTANCES_CLONE_POST: Operation = Operation {
    id: "PcloudPvminstancesClonePost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/clone",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("name").required(),
        Param::body("networks").required(),
        Param::body("keyPairName"),
        Param::body("memory"),
        Param::body("procType"),
        Param::body("processors"),
        Param::body("softwareLicenses"),
        Param::body("volumeIDs"),
    ],
    success: 202,
    body: true,
};

/// List all console languages.
pub static PCLOUD_PVMINSTANCES_CONSOLE_GET: Operation = Operation {
    id: "PcloudPvminstancesConsoleGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/console",
    params: &[Param::path("cloud_instance_id"), Param::path("pvm_instance_id")],
    success: 200,
    body: false,
};

/// Generate the noVNC Console URL.
pub static PCLOUD_PVMINSTANCES_CONSOLE_POST: Operation = Operation {
    id: "PcloudPvminstancesConsolePost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/console",
    params: &[Param::path("cloud_instance_id"), Param::path("pvm_instance_id")],
    success: 201,
    body: false,
};

/// Update PVMInstance console laguage code.
pub static PCLOUD_PVMINSTANCES_CONSOLE_PUT: Operation = Operation {
    id: "PcloudPvminstancesConsolePut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/console",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("code").required(),
        Param::body("language"),
    ],
    success: 200,
    body: true,
};

/// Get all networks for this PVM Instance.
pub static PCLOUD_PVMINSTANCES_NETWORKS_GETALL: Operation = Operation {
    id: "PcloudPvminstancesNetworksGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/networks",
    params: &[Param::path("cloud_instance_id"), Param::path("pvm_instance_id")],
    success: 200,
    body: false,
};

/// Perform network addition.
pub static PCLOUD_PVMINSTANCES_NETWORKS_POST: Operation = Operation {
    id: "PcloudPvminstancesNetworksPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/networks",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("networkID").required(),
        Param::body("ipAddress"),
    ],
    success: 201,
    body: true,
};

/// Get a PVM Instance's network information.
pub static PCLOUD_PVMINSTANCES_NETWORKS_GET: Operation = Operation {
    id: "PcloudPvminstancesNetworksGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/networks/{network_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::path("network_id"),
    ],
    success: 200,
    body: false,
};

/// Perform an operation on a PVMInstance.
pub static PCLOUD_PVMINSTANCES_OPERATIONS_POST: Operation = Operation {
    id: "PcloudPvminstancesOperationsPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/operations",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("operation").required(),
        Param::body("operationType").required(),
    ],
    success: 200,
    body: true,
};

/// Get all snapshots for this PVM Instance.
pub static PCLOUD_PVMINSTANCES_SNAPSHOTS_GETALL: Operation = Operation {
    id: "PcloudPvminstancesSnapshotsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/snapshots",
    params: &[Param::path("cloud_instance_id"), Param::path("pvm_instance_id")],
    success: 200,
    body: false,
};

/// Create a PVM Instance snapshot.
pub static PCLOUD_PVMINSTANCES_SNAPSHOTS_POST: Operation = Operation {
    id: "PcloudPvminstancesSnapshotsPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/snapshots",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("name").required(),
        Param::body("description"),
        Param::body("performancePath"),
        Param::body("volumeIDs"),
    ],
    success: 202,
    body: true,
};

/// Restore a PVM Instance snapshot.
pub static PCLOUD_PVMINSTANCES_SNAPSHOTS_RESTORE_POST: Operation = Operation {
    id: "PcloudPvminstancesSnapshotsRestorePost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/snapshots/{snapshot_id}/restore",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::path("snapshot_id"),
        Param::query("force"),
        Param::query("restore_fail_action"),
    ],
    success: 202,
    body: false,
};

/// Get all the pvm instances for this cloud instance.
pub static PCLOUD_V2_PVMINSTANCES_GETALL: Operation = Operation {
    id: "PcloudV2PvminstancesGetall",
    method: Method::Get,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/pvm-instances",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Get detail of last capture job.
pub static PCLOUD_V2_PVMINSTANCES_CAPTURE_GET: Operation = Operation {
    id: "PcloudV2PvminstancesCaptureGet",
    method: Method::Get,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/capture",
    params: &[Param::path("cloud_instance_id"), Param::path("pvm_instance_id")],
    success: 200,
    body: false,
};

/// Add a capture pvm-instance to the jobs queue.
pub static PCLOUD_V2_PVMINSTANCES_CAPTURE_POST: Operation = Operation {
    id: "PcloudV2PvminstancesCapturePost",
    method: Method::Post,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/capture",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("captureDestination").required(),
        Param::body("captureName").required(),
        Param::body("captureVolumeIDs"),
        Param::body("cloudStorageAccessKey"),
        Param::body("cloudStorageImagePath"),
        Param::body("cloudStorageRegion"),
        Param::body("cloudStorageSecretKey"),
    ],
    success: 202,
    body: true,
};

/// Get all Server Placement Groups.
pub static PCLOUD_PLACEMENTGROUPS_GETALL: Operation = Operation {
    id: "PcloudPlacementgroupsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/placement-groups",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create a new Server Placement Group.
pub static PCLOUD_PLACEMENTGROUPS_POST: Operation = Operation {
    id: "PcloudPlacementgroupsPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/placement-groups",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("name").required(),
        Param::body("policy").required(),
    ],
    success: 200,
    body: true,
};

/// Get Server Placement Group detail.
pub static PCLOUD_PLACEMENTGROUPS_GET: Operation = Operation {
    id: "PcloudPlacementgroupsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/placement-groups/{placement_group_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("placement_group_id")],
    success: 200,
    body: false,
};

/// Add Server to Placement Group.
pub static PCLOUD_PLACEMENTGROUPS_MEMBERS_POST: Operation = Operation {
    id: "PcloudPlacementgroupsMembersPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/placement-groups/{placement_group_id}/members",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("placement_group_id"),
        Param::body("id").required(),
    ],
    success: 200,
    body: true,
};

/// Get list of SAP profiles.
pub static PCLOUD_SAP_GETALL: Operation = Operation {
    id: "PcloudSapGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/sap",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create a new SAP PVM Instance.
pub static PCLOUD_SAP_POST: Operation = Operation {
    id: "PcloudSapPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/sap",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("imageID").required(),
        Param::body("name").required(),
        Param::body("networks").required(),
        Param::body("profileID").required(),
        Param::body("deploymentType"),
        Param::body("instances"),
        Param::body("pinPolicy"),
        Param::body("placementGroup"),
        Param::body("sshKeyName"),
        Param::body("storageAffinity"),
        Param::body("storagePool"),
        Param::body("storageType"),
        Param::body("sysType"),
        Param::body("userData"),
        Param::body("volumeIDs"),
    ],
    success: 200,
    body: true,
};

/// Get the information on an SAP profile.
pub static PCLOUD_SAP_GET: Operation = Operation {
    id: "PcloudSapGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/sap/{sap_profile_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("sap_profile_id")],
    success: 200,
    body: false,
};

/// Get the list of Shared Processor Pool Placement Groups for a cloud instance.
pub static PCLOUD_SPPPLACEMENTGROUPS_GETALL: Operation = Operation {
    id: "PcloudSppplacementgroupsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/spp-placement-groups",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create a new Shared Processor Pool Placement Group.
pub static PCLOUD_SPPPLACEMENTGROUPS_POST: Operation = Operation {
    id: "PcloudSppplacementgroupsPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/spp-placement-groups",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("name").required(),
        Param::body("policy").required(),
    ],
    success: 200,
    body: true,
};

/// Get the detail of a Shared Processor Pool Placement Group for a cloud instance.
pub static PCLOUD_SPPPLACEMENTGROUPS_GET: Operation = Operation {
    id: "PcloudSppplacementgroupsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/spp-placement-groups/{spp_placement_group_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("spp_placement_group_id")],
    success: 200,
    body: false,
};

/// Add Shared Processor Pool as a member of a Shared Processor Pool Placement Group.
pub static PCLOUD_SPPPLACEMENTGROUPS_MEMBERS_POST: Operation = Operation {
    id: "PcloudSppplacementgroupsMembersPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/spp-placement-groups/{spp_placement_group_id}/members/{shared_processor_pool_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("spp_placement_group_id"),
        Param::path("shared_processor_pool_id"),
    ],
    success: 200,
    body: false,
};

/// Get all DHCP Servers information (OpenShift Internal Use Only).
pub static PCLOUD_DHCP_GETALL: Operation = Operation {
    id: "PcloudDhcpGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/services/dhcp",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create a DHCP Server (OpenShift Internal Use Only).
pub static PCLOUD_DHCP_POST: Operation = Operation {
    id: "PcloudDhcpPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/services/dhcp",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("cidr"),
        Param::body("cloudConnectionID"),
        Param::body("dnsServer"),
        Param::body("name"),
        Param::body("snatEnabled"),
    ],
    success: 202,
    body: true,
};

/// Get DHCP Server information (OpenShift Internal Use Only).
pub static PCLOUD_DHCP_GET: Operation = Operation {
    id: "PcloudDhcpGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/services/dhcp/{dhcp_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("dhcp_id")],
    success: 200,
    body: false,
};

/// Get the list of Shared Processor Pools for a cloud instance.
pub static PCLOUD_SHAREDPROCESSORPOOLS_GETALL: Operation = Operation {
    id: "PcloudSharedprocessorpoolsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/shared-processor-pools",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create a new Shared Processor Pool.
pub static PCLOUD_SHAREDPROCESSORPOOLS_POST: Operation = Operation {
    id: "PcloudSharedprocessorpoolsPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/shared-processor-pools",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("hostGroup").required(),
        Param::body("name").required(),
        Param::body("reservedCores").required(),
        Param::body("placementGroupID"),
    ],
    success: 202,
    body: true,
};

/// Get the detail of a Shared Processor Pool for a cloud instance.
pub static PCLOUD_SHAREDPROCESSORPOOLS_GET: Operation = Operation {
    id: "PcloudSharedprocessorpoolsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/shared-processor-pools/{shared_processor_pool_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("shared_processor_pool_id")],
    success: 200,
    body: false,
};

/// Update a Shared Processor Pool for a cloud instance.
pub static PCLOUD_SHAREDPROCESSORPOOLS_PUT: Operation = Operation {
    id: "PcloudSharedprocessorpoolsPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/shared-processor-pools/{shared_processor_pool_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("shared_processor_pool_id"),
        Param::body("name"),
        Param::body("reservedCores"),
    ],
    success: 200,
    body: true,
};

/// List all PVM instance snapshots for this cloud instance.
pub static PCLOUD_CLOUDINSTANCES_SNAPSHOTS_GETALL: Operation = Operation {
    id: "PcloudCloudinstancesSnapshotsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/snapshots",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Get the detail of a snapshot.
pub static PCLOUD_CLOUDINSTANCES_SNAPSHOTS_GET: Operation = Operation {
    id: "PcloudCloudinstancesSnapshotsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/snapshots/{snapshot_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("snapshot_id")],
    success: 200,
    body: false,
};

/// Update a PVM instance snapshot.
pub static PCLOUD_CLOUDINSTANCES_SNAPSHOTS_PUT: Operation = Operation {
    id: "PcloudCloudinstancesSnapshotsPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/snapshots/{snapshot_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("snapshot_id"),
        Param::body("description"),
        Param::body("name"),
    ],
    success: 200,
    body: true,
};

/// Storage capacity for all available storage pools in a region.
pub static PCLOUD_STORAGECAPACITY_POOLS_GETALL: Operation = Operation {
    id: "PcloudStoragecapacityPoolsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/storage-capacity/storage-pools",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Storage capacity for a storage pool in a region.
pub static PCLOUD_STORAGECAPACITY_POOLS_GET: Operation = Operation {
    id: "PcloudStoragecapacityPoolsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/storage-capacity/storage-pools/{storage_pool_name}",
    params: &[Param::path("cloud_instance_id"), Param::path("storage_pool_name")],
    success: 200,
    body: false,
};

/// Storage capacity for all available storage types in a region.
pub static PCLOUD_STORAGECAPACITY_TYPES_GETALL: Operation = Operation {
    id: "PcloudStoragecapacityTypesGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/storage-capacity/storage-types",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Storage capacity for a storage type in a region.
pub static PCLOUD_STORAGECAPACITY_TYPES_GET: Operation = Operation {
    id: "PcloudStoragecapacityTypesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/storage-capacity/storage-types/{storage_type_name}",
    params: &[Param::path("cloud_instance_id"), Param::path("storage_type_name")],
    success: 200,
    body: false,
};

/// List of available system pools within a particular DataCenter.
pub static PCLOUD_SYSTEMPOOLS_GET: Operation = Operation {
    id: "PcloudSystempoolsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/system-pools",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Get a Task.
pub static PCLOUD_TASKS_GET: Operation = Operation {
    id: "PcloudTasksGet",
    method: Method::Get,
    path: "/pcloud/v1/tasks/{task_id}",
    params: &[Param::path("task_id")],
    success: 200,
    body: false,
};

/// Get a Tenant's current state/information.
pub static PCLOUD_TENANTS_GET: Operation = Operation {
    id: "PcloudTenantsGet",
    method: Method::Get,
    path: "/pcloud/v1/tenants/{tenant_id}",
    params: &[Param::path("tenant_id")],
    success: 200,
    body: false,
};

/// Update a tenant.
pub static PCLOUD_TENANTS_PUT: Operation = Operation {
    id: "PcloudTenantsPut",
    method: Method::Put,
    path: "/pcloud/v1/tenants/{tenant_id}",
    params: &[Param::path("tenant_id"), Param::body("icn"), Param::body("peeringNetworks")],
    success: 200,
    body: true,
};

/// List a Tenant's SSH Keys.
pub static PCLOUD_TENANTS_SSHKEYS_GETALL: Operation = Operation {
    id: "PcloudTenantsSshkeysGetall",
    method: Method::Get,
    path: "/pcloud/v1/tenants/{tenant_id}/sshkeys",
    params: &[Param::path("tenant_id")],
    success: 200,
    body: false,
};

/// Add a new SSH key to the Tenant.
pub static PCLOUD_TENANTS_SSHKEYS_POST: Operation = Operation {
    id: "PcloudTenantsSshkeysPost",
    method: Method::Post,
    path: "/pcloud/v1/tenants/{tenant_id}/sshkeys",
    params: &[
        Param::path("tenant_id"),
        Param::body("name").required(),
        Param::body("sshKey").required(),
        Param::body("creationDate"),
    ],
    success: 200,
    body: true,
};

/// Get a Tenant's SSH Key by name.
pub static PCLOUD_TENANTS_SSHKEYS_GET: Operation = Operation {
    id: "PcloudTenantsSshkeysGet",
    method: Method::Get,
    path: "/pcloud/v1/tenants/{tenant_id}/sshkeys/{sshkey_name}",
    params: &[Param::path("tenant_id"), Param::path("sshkey_name")],
    success: 200,
    body: false,
};

/// Update an SSH Key.
pub static PCLOUD_TENANTS_SSHKEYS_PUT: Operation = Operation {
    id: "PcloudTenantsSshkeysPut",
    method: Method::Put,
    path: "/pcloud/v1/tenants/{tenant_id}/sshkeys/{sshkey_name}",
    params: &[
        Param::path("tenant_id"),
        Param::path("sshkey_name"),
        Param::body("name").required(),
        Param::body("sshKey").required(),
        Param::body("creationDate"),
    ],
    success: 200,
    body: true,
};

/// Get all VPN Connections.
pub static PCLOUD_VPNCONNECTIONS_GETALL: Operation = Operation {
    id: "PcloudVpnconnectionsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create VPN Connection.
pub static PCLOUD_VPNCONNECTIONS_POST: Operation = Operation {
    id: "PcloudVpnconnectionsPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("ikePolicy").required(),
        Param::body("ipSecPolicy").required(),
        Param::body("mode").required(),
        Param::body("name").required(),
        Param::body("networks").required(),
        Param::body("peerGatewayAddress").required(),
        Param::body("peerSubnets").required(),
    ],
    success: 202,
    body: true,
};

/// Get VPN Connection.
pub static PCLOUD_VPNCONNECTIONS_GET: Operation = Operation {
    id: "PcloudVpnconnectionsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections/{vpn_connection_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("vpn_connection_id")],
    success: 200,
    body: false,
};

/// Update VPN Connection.
pub static PCLOUD_VPNCONNECTIONS_PUT: Operation = Operation {
    id: "PcloudVpnconnectionsPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections/{vpn_connection_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("vpn_connection_id")],
    success: 200,
    body: true,
};

/// Get attached networks.
pub static PCLOUD_VPNCONNECTIONS_NETWORKS_GET: Operation = Operation {
    id: "PcloudVpnconnectionsNetworksGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections/{vpn_connection_id}/networks",
    params: &[Param::path("cloud_instance_id"), Param::path("vpn_connection_id")],
    success: 200,
    body: false,
};

/// Attach network.
pub static PCLOUD_VPNCONNECTIONS_NETWORKS_PUT: Operation = Operation {
    id: "PcloudVpnconnectionsNetworksPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections/{vpn_connection_id}/networks",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("vpn_connection_id"),
        Param::body("networkID").required(),
    ],
    success: 202,
    body: true,
};

/// Get Peer Subnets.
pub static PCLOUD_VPNCONNECTIONS_PEERSUBNETS_GET: Operation = Operation {
    id: "PcloudVpnconnectionsPeersubnetsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections/{vpn_connection_id}/peer-subnets",
    params: &[Param::path("cloud_instance_id"), Param::path("vpn_connection_id")],
    success: 200,
    body: false,
};

/// Attach Peer Subnet.
pub static PCLOUD_VPNCONNECTIONS_PEERSUBNETS_PUT: Operation = Operation {
    id: "PcloudVpnconnectionsPeersubnetsPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections/{vpn_connection_id}/peer-subnets",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("vpn_connection_id"),
        Param::body("cidr").required(),
    ],
    success: 200,
    body: true,
};

/// Get all IKE Policies.
pub static PCLOUD_IKEPOLICIES_GETALL: Operation = Operation {
    id: "PcloudIkepoliciesGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ike-policies",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Add IKE Policy.
pub static PCLOUD_IKEPOLICIES_POST: Operation = Operation {
    id: "PcloudIkepoliciesPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ike-policies",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("dhGroup").required(),
        Param::body("encryption").required(),
        Param::body("keyLifetime").required(),
        Param::body("name").required(),
        Param::body("presharedKey").required(),
        Param::body("version").required(),
        Param::body("authentication"),
    ],
    success: 200,
    body: true,
};

/// Get the specified IKE Policy.
pub static PCLOUD_IKEPOLICIES_GET: Operation = Operation {
    id: "PcloudIkepoliciesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ike-policies/{ike_policy_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("ike_policy_id")],
    success: 200,
    body: false,
};

/// Update IKE Policy.
pub static PCLOUD_IKEPOLICIES_PUT: Operation = Operation {
    id: "PcloudIkepoliciesPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ike-policies/{ike_policy_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("ike_policy_id")],
    success: 200,
    body: true,
};

/// Get all IPSec Policies.
pub static PCLOUD_IPSECPOLICIES_GETALL: Operation = Operation {
    id: "PcloudIpsecpoliciesGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ipsec-policies",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Add IPSec Policy.
pub static PCLOUD_IPSECPOLICIES_POST: Operation = Operation {
    id: "PcloudIpsecpoliciesPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ipsec-policies",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("dhGroup").required(),
        Param::body("encryption").required(),
        Param::body("keyLifetime").required(),
        Param::body("name").required(),
        Param::body("pfs").required(),
        Param::body("authentication"),
    ],
    success: 200,
    body: true,
};

/// Get the specified IPSec Policy.
pub static PCLOUD_IPSECPOLICIES_GET: Operation = Operation {
    id: "PcloudIpsecpoliciesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ipsec-policies/{ipsec_policy_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("ipsec_policy_id")],
    success: 200,
    body: false,
};

/// Update IPSec Policy.
pub static PCLOUD_IPSECPOLICIES_PUT: Operation = Operation {
    id: "PcloudIpsecpoliciesPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ipsec-policies/{ipsec_policy_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("ipsec_policy_id")],
    success: 200,
    body: true,
};

/// Get all volume groups.
pub static PCLOUD_VOLUMEGROUPS_GETALL: Operation = Operation {
    id: "PcloudVolumegroupsGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Create a new volume group.
pub static PCLOUD_VOLUMEGROUPS_POST: Operation = Operation {
    id: "PcloudVolumegroupsPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("volumeIDs").required(),
        Param::body("consistencyGroupName"),
        Param::body("name"),
    ],
    success: 202,
    body: true,
};

/// Get all volume groups with details.
pub static PCLOUD_VOLUMEGROUPS_GETALL_DETAILS: Operation = Operation {
    id: "PcloudVolumegroupsGetallDetails",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups/details",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Get volume Group.
pub static PCLOUD_VOLUMEGROUPS_GET: Operation = Operation {
    id: "PcloudVolumegroupsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups/{volume_group_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_group_id")],
    success: 200,
    body: false,
};

/// updates the volume group.
pub static PCLOUD_VOLUMEGROUPS_PUT: Operation = Operation {
    id: "PcloudVolumegroupsPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups/{volume_group_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("volume_group_id"),
        Param::body("addVolumes"),
        Param::body("removeVolumes"),
    ],
    success: 202,
    body: true,
};

/// Perform an action (start stop reset ) on a volume group.
pub static PCLOUD_VOLUMEGROUPS_ACTION_POST: Operation = Operation {
    id: "PcloudVolumegroupsActionPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups/{volume_group_id}/action",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_group_id")],
    success: 202,
    body: true,
};

/// Get volume Group details.
pub static PCLOUD_VOLUMEGROUPS_GET_DETAILS: Operation = Operation {
    id: "PcloudVolumegroupsGetDetails",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups/{volume_group_id}/details",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_group_id")],
    success: 200,
    body: false,
};

/// Get remote copy relationships of the volume belonging to volume group.
pub static PCLOUD_VOLUMEGROUPS_REMOTE_COPY_RELATIONSHIPS_GET: Operation = Operation {
    id: "PcloudVolumegroupsRemoteCopyRelationshipsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups/{volume_group_id}/remote-copy-relationships",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_group_id")],
    success: 200,
    body: false,
};

/// Get storage details of volume group.
pub static PCLOUD_VOLUMEGROUPS_STORAGE_DETAILS_GET: Operation = Operation {
    id: "PcloudVolumegroupsStorageDetailsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups/{volume_group_id}/storage-details",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_group_id")],
    success: 200,
    body: false,
};

/// List all volume onboardings for this cloud instance.
pub static PCLOUD_VOLUME_ONBOARDING_GETALL: Operation = Operation {
    id: "PcloudVolumeOnboardingGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/onboarding",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Onboard auxiliary volumes to target site.
pub static PCLOUD_VOLUME_ONBOARDING_POST: Operation = Operation {
    id: "PcloudVolumeOnboardingPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/onboarding",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("volumes").required(),
        Param::body("description"),
    ],
    success: 202,
    body: true,
};

/// Get the information of volume onboarding operation.
pub static PCLOUD_VOLUME_ONBOARDING_GET: Operation = Operation {
    id: "PcloudVolumeOnboardingGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/onboarding/{volume_onboarding_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_onboarding_id")],
    success: 200,
    body: false,
};

/// List all volumes attached to a PVM Instance.
pub static PCLOUD_PVMINSTANCES_VOLUMES_GETALL: Operation = Operation {
    id: "PcloudPvminstancesVolumesGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/volumes",
    params: &[Param::path("cloud_instance_id"), Param::path("pvm_instance_id")],
    success: 200,
    body: false,
};

/// Detailed info of a volume attached to a PVMInstance.
pub static PCLOUD_PVMINSTANCES_VOLUMES_GET: Operation = Operation {
    id: "PcloudPvminstancesVolumesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/volumes/{volume_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::path("volume_id"),
    ],
    success: 200,
    body: false,
};

/// Attach a volume to a PVMInstance.
pub static PCLOUD_PVMINSTANCES_VOLUMES_POST: Operation = Operation {
    id: "PcloudPvminstancesVolumesPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/volumes/{volume_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::path("volume_id"),
    ],
    success: 200,
    body: false,
};

/// Update a volume attached to a PVMInstance.
pub static PCLOUD_PVMINSTANCES_VOLUMES_PUT: Operation = Operation {
    id: "PcloudPvminstancesVolumesPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/volumes/{volume_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::path("volume_id"),
        Param::body("deleteOnTermination").required(),
    ],
    success: 200,
    body: true,
};

/// Set the PVMInstance volume as the boot volume.
pub static PCLOUD_PVMINSTANCES_VOLUMES_SETBOOT_PUT: Operation = Operation {
    id: "PcloudPvminstancesVolumesSetbootPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/volumes/{volume_id}/setboot",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::path("volume_id"),
    ],
    success: 200,
    body: false,
};

/// List all volumes for this cloud instance.
pub static PCLOUD_CLOUDINSTANCES_VOLUMES_GETALL: Operation = Operation {
    id: "PcloudCloudinstancesVolumesGetall",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes",
    params: &[
        Param::path("cloud_instance_id"),
        Param::query("replicationEnabled"),
        Param::query("affinity"),
        Param::query("auxiliary"),
    ],
    success: 200,
    body: false,
};

/// Create a new data Volume.
pub static PCLOUD_CLOUDINSTANCES_VOLUMES_POST: Operation = Operation {
    id: "PcloudCloudinstancesVolumesPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("name").required(),
        Param::body("size").required(),
        Param::body("affinityPVMInstance"),
        Param::body("affinityPolicy"),
        Param::body("affinityVolume"),
        Param::body("antiAffinityPVMInstances"),
        Param::body("antiAffinityVolumes"),
        Param::body("diskType"),
        Param::body("replicationEnabled"),
        Param::body("shareable"),
        Param::body("volumePool"),
    ],
    success: 202,
    body: true,
};

/// Create a volume clone for specified volumes.
pub static PCLOUD_VOLUMES_CLONE_POST: Operation = Operation {
    id: "PcloudVolumesClonePost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/clone",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("displayName").required(),
        Param::body("volumeIDs").required(),
    ],
    success: 200,
    body: true,
};

/// Detailed info of a volume.
pub static PCLOUD_CLOUDINSTANCES_VOLUMES_GET: Operation = Operation {
    id: "PcloudCloudinstancesVolumesGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/{volume_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_id")],
    success: 200,
    body: false,
};

/// Update a cloud instance volume.
pub static PCLOUD_CLOUDINSTANCES_VOLUMES_PUT: Operation = Operation {
    id: "PcloudCloudinstancesVolumesPut",
    method: Method::Put,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/{volume_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("volume_id"),
        Param::body("bootable"),
        Param::body("name"),
        Param::body("shareable"),
        Param::body("size"),
    ],
    success: 200,
    body: true,
};

/// Perform an action on a Volume.
pub static PCLOUD_CLOUDINSTANCES_VOLUMES_ACTION_POST: Operation = Operation {
    id: "PcloudCloudinstancesVolumesActionPost",
    method: Method::Post,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/{volume_id}/action",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("volume_id"),
        Param::body("replicationEnabled"),
    ],
    success: 202,
    body: true,
};

/// Get a list of flashcopy mappings of a given volume.
pub static PCLOUD_CLOUDINSTANCES_VOLUMES_FLASH_COPY_MAPPINGS_GET: Operation = Operation {
    id: "PcloudCloudinstancesVolumesFlashCopyMappingsGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/{volume_id}/flash-copy-mappings",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_id")],
    success: 200,
    body: false,
};

/// Get remote copy relationship of a volume.
pub static PCLOUD_CLOUDINSTANCES_VOLUMES_REMOTE_COPY_RELATIONSHIP_GET: Operation = Operation {
    id: "PcloudCloudinstancesVolumesRemoteCopyRelationshipGet",
    method: Method::Get,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/{volume_id}/remote-copy",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_id")],
    success: 200,
    body: false,
};

/// Attach all volumes to a PVMInstance.
pub static PCLOUD_V2_PVMINSTANCES_VOLUMES_POST: Operation = Operation {
    id: "PcloudV2PvminstancesVolumesPost",
    method: Method::Post,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/volumes",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::body("volumeIDs").required(),
        Param::body("performancePath"),
    ],
    success: 202,
    body: true,
};

/// Create multiple data volumes from a single definition.
pub static PCLOUD_V2_VOLUMES_POST: Operation = Operation {
    id: "PcloudV2VolumesPost",
    method: Method::Post,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("name").required(),
        Param::body("size").required(),
        Param::body("affinityPVMInstance"),
        Param::body("affinityPolicy"),
        Param::body("affinityVolume"),
        Param::body("antiAffinityPVMInstances"),
        Param::body("antiAffinityVolumes"),
        Param::body("count"),
        Param::body("diskType"),
        Param::body("replicationEnabled"),
        Param::body("shareable"),
        Param::body("volumePool"),
    ],
    success: 201,
    body: true,
};

/// Get the list of volumes-clone request for a cloud instance.
pub static PCLOUD_V2_VOLUMESCLONE_GETALL: Operation = Operation {
    id: "PcloudV2VolumescloneGetall",
    method: Method::Get,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes-clone",
    params: &[Param::path("cloud_instance_id"), Param::query("filter")],
    success: 200,
    body: false,
};

/// Create a new volumes clone request and initiates the Prepare action. Requires a minimum of two
/// volumes. Requires a minimum of one volume to be in the 'in-use' state. Requires a unique volumes
/// clone name. Prepare action does the preparatory work for creating the snapshot volumes.
pub static PCLOUD_V2_VOLUMESCLONE_POST: Operation = Operation {
    id: "PcloudV2VolumesclonePost",
    method: Method::Post,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes-clone",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("name").required(),
        Param::body("volumeIDs").required(),
        Param::body("performancePath"),
    ],
    success: 202,
    body: true,
};

/// Get the details for a volumes-clone request.
pub static PCLOUD_V2_VOLUMESCLONE_GET: Operation = Operation {
    id: "PcloudV2VolumescloneGet",
    method: Method::Get,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes-clone/{volumes_clone_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("volumes_clone_id")],
    success: 200,
    body: false,
};

/// Cancel a volumes-clone request, initiates the Cleanup action Cleanup action performs the cleanup
/// of the preparatory clones and snapshot volumes.
pub static PCLOUD_V2_VOLUMESCLONE_CANCEL_POST: Operation = Operation {
    id: "PcloudV2VolumescloneCancelPost",
    method: Method::Post,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes-clone/{volumes_clone_id}/cancel",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("volumes_clone_id"),
        Param::body("force"),
    ],
    success: 202,
    body: true,
};

/// Initiate the Execute action for a volumes-clone request Execute action creates the cloned
/// volumes using the volume snapshots.
pub static PCLOUD_V2_VOLUMESCLONE_EXECUTE_POST: Operation = Operation {
    id: "PcloudV2VolumescloneExecutePost",
    method: Method::Post,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes-clone/{volumes_clone_id}/execute",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("volumes_clone_id"),
        Param::body("name").required(),
        Param::body("rollbackPrepare"),
    ],
    success: 202,
    body: true,
};

/// Initiate the Start action for a volumes-clone request Start action starts the consistency group
/// to initiate the flash copy.
pub static PCLOUD_V2_VOLUMESCLONE_START_POST: Operation = Operation {
    id: "PcloudV2VolumescloneStartPost",
    method: Method::Post,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes-clone/{volumes_clone_id}/start",
    params: &[Param::path("cloud_instance_id"), Param::path("volumes_clone_id")],
    success: 200,
    body: false,
};

/// Create a volume clone for specified volumes.
pub static PCLOUD_V2_VOLUMES_CLONE_POST: Operation = Operation {
    id: "PcloudV2VolumesClonePost",
    method: Method::Post,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes/clone",
    params: &[
        Param::path("cloud_instance_id"),
        Param::body("name").required(),
        Param::body("volumeIDs").required(),
    ],
    success: 202,
    body: true,
};

/// Get the status of a volumes clone request for the specified clone task ID.
pub static PCLOUD_V2_VOLUMES_CLONETASKS_GET: Operation = Operation {
    id: "PcloudV2VolumesClonetasksGet",
    method: Method::Get,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes/clone-tasks/{clone_task_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("clone_task_id"),
        Param::header("Accept"),
    ],
    success: 200,
    body: false,
};

/// gets a service binding.
pub static SERVICE_BINDING_GET: Operation = Operation {
    id: "ServiceBindingGet",
    method: Method::Get,
    path: "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    params: &[
        Param::path("instance_id"),
        Param::path("binding_id"),
        Param::header("X-Broker-API-Version").required(),
        Param::header("X-Broker-API-Originating-Identity"),
        Param::query("accepts_incomplete"),
    ],
    success: 200,
    body: false,
};

/// generation of a service binding.
pub static SERVICE_BINDING_BINDING: Operation = Operation {
    id: "ServiceBindingBinding",
    method: Method::Put,
    path: "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    params: &[
        Param::path("instance_id"),
        Param::path("binding_id"),
        Param::header("X-Broker-API-Version").required(),
        Param::header("X-Broker-API-Originating-Identity"),
        Param::query("accepts_incomplete"),
        Param::body("plan_id").required(),
        Param::body("service_id").required(),
        Param::body("app_guid"),
        Param::body("bind_resource"),
        Param::body("context"),
        Param::body("parameters"),
    ],
    success: 200,
    body: true,
};

/// last requested operation state for service binding.
pub static SERVICE_BINDING_LAST_OPERATION_GET: Operation = Operation {
    id: "ServiceBindingLastOperationGet",
    method: Method::Get,
    path: "/v2/service_instances/{instance_id}/service_bindings/{binding_id}/last_operation",
    params: &[
        Param::path("instance_id"),
        Param::path("binding_id"),
        Param::header("X-Broker-API-Version").required(),
        Param::header("X-Broker-API-Originating-Identity"),
        Param::query("service_id"),
        Param::query("plan_id"),
        Param::query("operation"),
        Param::query("accepts_incomplete"),
    ],
    success: 200,
    body: false,
};

/// gets a service instance.
pub static SERVICE_INSTANCE_GET: Operation = Operation {
    id: "ServiceInstanceGet",
    method: Method::Get,
    path: "/v2/service_instances/{instance_id}",
    params: &[
        Param::path("instance_id"),
        Param::header("X-Broker-API-Version").required(),
        Param::header("X-Broker-API-Originating-Identity"),
        Param::query("accepts_incomplete"),
    ],
    success: 200,
    body: false,
};

/// update a service instance.
pub static SERVICE_INSTANCE_UPDATE: Operation = Operation {
    id: "ServiceInstanceUpdate",
    method: Method::Patch,
    path: "/v2/service_instances/{instance_id}",
    params: &[
        Param::path("instance_id"),
        Param::header("X-Broker-API-Version").required(),
        Param::header("X-Broker-API-Originating-Identity"),
        Param::query("accepts_incomplete"),
        Param::body("service_id").required(),
        Param::body("context"),
        Param::body("parameters"),
        Param::body("plan_id"),
        Param::body("previous_values"),
    ],
    success: 200,
    body: true,
};

/// provision a service instance.
pub static SERVICE_INSTANCE_PROVISION: Operation = Operation {
    id: "ServiceInstanceProvision",
    method: Method::Put,
    path: "/v2/service_instances/{instance_id}",
    params: &[
        Param::path("instance_id"),
        Param::header("X-Broker-API-Version").required(),
        Param::header("X-Broker-API-Originating-Identity"),
        Param::query("accepts_incomplete"),
        Param::body("plan_id").required(),
        Param::body("service_id").required(),
        Param::body("context"),
        Param::body("organization_guid").required(),
        Param::body("parameters"),
        Param::body("space_guid").required(),
    ],
    success: 200,
    body: true,
};

/// last requested operation state for service instance.
pub static SERVICE_INSTANCE_LAST_OPERATION_GET: Operation = Operation {
    id: "ServiceInstanceLastOperationGet",
    method: Method::Get,
    path: "/v2/service_instances/{instance_id}/last_operation",
    params: &[
        Param::path("instance_id"),
        Param::header("X-Broker-API-Version").required(),
        Param::header("X-Broker-API-Originating-Identity"),
        Param::query("service_id"),
        Param::query("plan_id"),
        Param::query("operation"),
        Param::query("accepts_incomplete"),
    ],
    success: 200,
    body: false,
};

/// Available storage types in a region.
pub static SERVICE_BROKER_STORAGETYPES_GET: Operation = Operation {
    id: "ServiceBrokerStoragetypesGet",
    method: Method::Get,
    path: "/broker/v1/storage-types",
    params: &[],
    success: 200,
    body: false,
};

/// Get swagger json spec.
pub static SERVICE_BROKER_SWAGGERSPEC: Operation = Operation {
    id: "ServiceBrokerSwaggerspec",
    method: Method::Get,
    path: "/v1/swagger.json",
    params: &[],
    success: 200,
    body: false,
};

/// Delete a Cloud Connection.
pub static PCLOUD_CLOUDCONNECTIONS_DELETE: Operation = Operation {
    id: "PcloudCloudconnectionsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cloud-connections/{cloud_connection_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("cloud_connection_id")],
    success: 200,
    body: false,
};

/// Detach a network from a Cloud Connection.
pub static PCLOUD_CLOUDCONNECTIONS_NETWORKS_DELETE: Operation = Operation {
    id: "PcloudCloudconnectionsNetworksDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/cloud-connections/{cloud_connection_id}/networks/{network_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("cloud_connection_id"),
        Param::path("network_id"),
    ],
    success: 200,
    body: false,
};

/// Delete an Image from a Cloud Instance.
pub static PCLOUD_CLOUDINSTANCES_IMAGES_DELETE: Operation = Operation {
    id: "PcloudCloudinstancesImagesDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/images/{image_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("image_id")],
    success: 200,
    body: false,
};

/// Delete a Power Cloud Instance.
pub static PCLOUD_CLOUDINSTANCES_DELETE: Operation = Operation {
    id: "PcloudCloudinstancesDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}",
    params: &[Param::path("cloud_instance_id")],
    success: 200,
    body: false,
};

/// Delete a cloud instance job.
pub static PCLOUD_CLOUDINSTANCES_JOBS_DELETE: Operation = Operation {
    id: "PcloudCloudinstancesJobsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/jobs/{job_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("job_id")],
    success: 200,
    body: false,
};

/// Delete a Network.
pub static PCLOUD_NETWORKS_DELETE: Operation = Operation {
    id: "PcloudNetworksDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks/{network_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("network_id")],
    success: 200,
    body: false,
};

/// Delete a Network Port.
pub static PCLOUD_NETWORKS_PORTS_DELETE: Operation = Operation {
    id: "PcloudNetworksPortsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/networks/{network_id}/ports/{port_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("network_id"), Param::path("port_id")],
    success: 200,
    body: false,
};

/// Delete a PCloud PVM Instance.
pub static PCLOUD_PVMINSTANCES_DELETE: Operation = Operation {
    id: "PcloudPvminstancesDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::query("delete_data_volumes"),
    ],
    success: 200,
    body: false,
};

/// Remove all Address of Network from a PVM Instance.
pub static PCLOUD_PVMINSTANCES_NETWORKS_DELETE: Operation = Operation {
    id: "PcloudPvminstancesNetworksDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/networks/{network_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::path("network_id"),
        Param::body("macAddress"),
    ],
    success: 200,
    body: true,
};

/// Delete Server Placement Group.
pub static PCLOUD_PLACEMENTGROUPS_DELETE: Operation = Operation {
    id: "PcloudPlacementgroupsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/placement-groups/{placement_group_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("placement_group_id")],
    success: 200,
    body: false,
};

/// Remove Server from Placement Group.
pub static PCLOUD_PLACEMENTGROUPS_MEMBERS_DELETE: Operation = Operation {
    id: "PcloudPlacementgroupsMembersDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/placement-groups/{placement_group_id}/members",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("placement_group_id"),
        Param::body("id").required(),
    ],
    success: 200,
    body: true,
};

/// Delete a Shared Processor Pool Placement Group from a cloud instance.
pub static PCLOUD_SPPPLACEMENTGROUPS_DELETE: Operation = Operation {
    id: "PcloudSppplacementgroupsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/spp-placement-groups/{spp_placement_group_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("spp_placement_group_id")],
    success: 200,
    body: false,
};

/// Delete Shared Processor Pool member from a Shared Processor Pool Placement Group.
pub static PCLOUD_SPPPLACEMENTGROUPS_MEMBERS_DELETE: Operation = Operation {
    id: "PcloudSppplacementgroupsMembersDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/spp-placement-groups/{spp_placement_group_id}/members/{shared_processor_pool_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("spp_placement_group_id"),
        Param::path("shared_processor_pool_id"),
    ],
    success: 200,
    body: false,
};

/// Delete DHCP Server (OpenShift Internal Use Only).
pub static PCLOUD_DHCP_DELETE: Operation = Operation {
    id: "PcloudDhcpDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/services/dhcp/{dhcp_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("dhcp_id")],
    success: 202,
    body: false,
};

/// Delete a Shared Processor Pool from a cloud instance.
pub static PCLOUD_SHAREDPROCESSORPOOLS_DELETE: Operation = Operation {
    id: "PcloudSharedprocessorpoolsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/shared-processor-pools/{shared_processor_pool_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("shared_processor_pool_id")],
    success: 200,
    body: false,
};

/// Delete a PVM instance snapshot of a cloud instance.
pub static PCLOUD_CLOUDINSTANCES_SNAPSHOTS_DELETE: Operation = Operation {
    id: "PcloudCloudinstancesSnapshotsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/snapshots/{snapshot_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("snapshot_id")],
    success: 202,
    body: false,
};

/// Delete a Task.
pub static PCLOUD_TASKS_DELETE: Operation = Operation {
    id: "PcloudTasksDelete",
    method: Method::Delete,
    path: "/pcloud/v1/tasks/{task_id}",
    params: &[Param::path("task_id")],
    success: 200,
    body: false,
};

/// Delete a Tenant's SSH key.
pub static PCLOUD_TENANTS_SSHKEYS_DELETE: Operation = Operation {
    id: "PcloudTenantsSshkeysDelete",
    method: Method::Delete,
    path: "/pcloud/v1/tenants/{tenant_id}/sshkeys/{sshkey_name}",
    params: &[Param::path("tenant_id"), Param::path("sshkey_name")],
    success: 200,
    body: false,
};

/// Delete VPN Connection.
pub static PCLOUD_VPNCONNECTIONS_DELETE: Operation = Operation {
    id: "PcloudVpnconnectionsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections/{vpn_connection_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("vpn_connection_id")],
    success: 202,
    body: false,
};

/// Detach network.
pub static PCLOUD_VPNCONNECTIONS_NETWORKS_DELETE: Operation = Operation {
    id: "PcloudVpnconnectionsNetworksDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections/{vpn_connection_id}/networks",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("vpn_connection_id"),
        Param::body("networkID").required(),
    ],
    success: 202,
    body: true,
};

/// Detach Peer Subnet.
pub static PCLOUD_VPNCONNECTIONS_PEERSUBNETS_DELETE: Operation = Operation {
    id: "PcloudVpnconnectionsPeersubnetsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/vpn-connections/{vpn_connection_id}/peer-subnets",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("vpn_connection_id"),
        Param::body("cidr").required(),
    ],
    success: 200,
    body: true,
};

/// Delete IKE Policy.
pub static PCLOUD_IKEPOLICIES_DELETE: Operation = Operation {
    id: "PcloudIkepoliciesDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ike-policies/{ike_policy_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("ike_policy_id")],
    success: 200,
    body: false,
};

/// Delete IPSec Policy.
pub static PCLOUD_IPSECPOLICIES_DELETE: Operation = Operation {
    id: "PcloudIpsecpoliciesDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/vpn/ipsec-policies/{ipsec_policy_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("ipsec_policy_id")],
    success: 200,
    body: false,
};

/// Delete a cloud instance volume group.
pub static PCLOUD_VOLUMEGROUPS_DELETE: Operation = Operation {
    id: "PcloudVolumegroupsDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volume-groups/{volume_group_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_group_id")],
    success: 202,
    body: false,
};

/// Detach a volume from a PVMInstance.
pub static PCLOUD_PVMINSTANCES_VOLUMES_DELETE: Operation = Operation {
    id: "PcloudPvminstancesVolumesDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}/volumes/{volume_id}",
    params: &[
        Param::path("cloud_instance_id"),
        Param::path("pvm_instance_id"),
        Param::path("volume_id"),
    ],
    success: 202,
    body: false,
};

/// Delete a cloud instance volume.
pub static PCLOUD_CLOUDINSTANCES_VOLUMES_DELETE: Operation = Operation {
    id: "PcloudCloudinstancesVolumesDelete",
    method: Method::Delete,
    path: "/pcloud/v1/cloud-instances/{cloud_instance_id}/volumes/{volume_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("volume_id")],
    success: 200,
    body: false,
};

/// Delete a volumes-clone request.
pub static PCLOUD_V2_VOLUMESCLONE_DELETE: Operation = Operation {
    id: "PcloudV2VolumescloneDelete",
    method: Method::Delete,
    path: "/pcloud/v2/cloud-instances/{cloud_instance_id}/volumes-clone/{volumes_clone_id}",
    params: &[Param::path("cloud_instance_id"), Param::path("volumes_clone_id")],
    success: 200,
    body: false,
};

/// deprovision of a service binding.
pub static SERVICE_BINDING_UNBINDING: Operation = Operation {
    id: "ServiceBindingUnbinding",
    method: Method::Delete,
    path: "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    params: &[
        Param::path("instance_id"),
        Param::path("binding_id"),
        Param::header("X-Broker-API-Version").required(),
        Param::header("X-Broker-API-Originating-Identity"),
        Param::query("service_id").required(),
        Param::query("plan_id").required(),
        Param::query("accepts_incomplete"),
    ],
    success: 200,
    body: false,
};

/// deprovision a service instance.
pub static SERVICE_INSTANCE_DEPROVISION: Operation = Operation {
    id: "ServiceInstanceDeprovision",
    method: Method::Delete,
    path: "/v2/service_instances/{instance_id}",
    params: &[
        Param::path("instance_id"),
        Param::header("X-Broker-API-Version").required(),
        Param::header("X-Broker-API-Originating-Identity"),
        Param::query("service_id").required(),
        Param::query("plan_id").required(),
        Param::query("accepts_incomplete"),
    ],
    success: 200,
    body: false,
};

/// Every operation, in catalog order.
pub static ALL: &[&Operation] = &[
    &SERVICE_BROKER_AUTH_CALLBACK,
    &SERVICE_BROKER_AUTH_REGISTRATION_CALLBACK,
    &SERVICE_BROKER_AUTH_DEVICE_CODE_POST,
    &SERVICE_BROKER_AUTH_DEVICE_TOKEN_POST,
    &SERVICE_BROKER_AUTH_INFO_TOKEN,
    &SERVICE_BROKER_AUTH_INFO_USER,
    &SERVICE_BROKER_AUTH_LOGIN,
    &SERVICE_BROKER_AUTH_LOGOUT,
    &SERVICE_BROKER_AUTH_REGISTRATION,
    &SERVICE_BROKER_AUTH_TOKEN_POST,
    &BLUEMIX_SERVICE_INSTANCE_GET,
    &BLUEMIX_SERVICE_INSTANCE_PUT,
    &CATALOG_GET,
    &SERVICE_BROKER_HARDWAREPLATFORMS_GET,
    &SERVICE_BROKER_HEALTH_HEAD,
    &SERVICE_BROKER_HEALTH,
    &SERVICE_BROKER_TEST_TIMEOUT,
    &SERVICE_BROKER_VERSION,
    &INTERNAL_V1_POWERVS_INSTANCES_GET,
    &INTERNAL_V1_POWERVS_LOCATIONS_TRANSITGATEWAY_GET,
    &INTERNAL_V1_STORAGE_REGIONS_STORAGE_POOLS_GETALL,
    &INTERNAL_V1_STORAGE_REGIONS_STORAGE_POOLS_GET,
    &INTERNAL_V1_STORAGE_REGIONS_STORAGE_POOLS_PUT,
    &INTERNAL_V1_STORAGE_REGIONS_THRESHOLDS_GET,
    &INTERNAL_V1_STORAGE_REGIONS_THRESHOLDS_PUT,
    &INTERNAL_V1_TRANSITGATEWAY_GET,
    &SERVICE_BROKER_OPENSTACKS_GET,
    &SERVICE_BROKER_OPENSTACKS_POST,
    &SERVICE_BROKER_OPENSTACKS_OPENSTACK_GET,
    &SERVICE_BROKER_OPENSTACKS_HOSTS_GET,
    &SERVICE_BROKER_OPENSTACKS_SERVERS_GET,
    &PCLOUD_CLOUDCONNECTIONS_GETALL,
    &PCLOUD_CLOUDCONNECTIONS_POST,
    &PCLOUD_CLOUDCONNECTIONS_VIRTUALPRIVATECLOUDS_GETALL,
    &PCLOUD_CLOUDCONNECTIONS_GET,
    &PCLOUD_CLOUDCONNECTIONS_PUT,
    &PCLOUD_CLOUDCONNECTIONS_NETWORKS_PUT,
    &PCLOUD_LOCATIONS_DISASTERRECOVERY_GET,
    &PCLOUD_LOCATIONS_DISASTERRECOVERY_GETALL,
    &PCLOUD_EVENTS_GETQUERY,
    &PCLOUD_EVENTS_GET,
    &PCLOUD_V1_CLOUDINSTANCES_COSIMAGES_GET,
    &PCLOUD_V1_CLOUDINSTANCES_COSIMAGES_POST,
    &PCLOUD_CLOUDINSTANCES_IMAGES_GETALL,
    &PCLOUD_CLOUDINSTANCES_IMAGES_POST,
    &PCLOUD_CLOUDINSTANCES_IMAGES_GET,
    &PCLOUD_CLOUDINSTANCES_IMAGES_EXPORT_POST,
    &PCLOUD_CLOUDINSTANCES_STOCKIMAGES_GETALL,
    &PCLOUD_CLOUDINSTANCES_STOCKIMAGES_GET,
    &PCLOUD_IMAGES_GETALL,
    &PCLOUD_IMAGES_GET,
    &PCLOUD_V2_IMAGES_EXPORT_GET,
    &PCLOUD_V2_IMAGES_EXPORT_POST,
    &PCLOUD_CLOUDINSTANCES_GET,
    &PCLOUD_CLOUDINSTANCES_PUT,
    &PCLOUD_CLOUDINSTANCES_JOBS_GETALL,
    &PCLOUD_CLOUDINSTANCES_JOBS_GET,
    &PCLOUD_NETWORKS_GETALL,
    &PCLOUD_NETWORKS_POST,
    &PCLOUD_NETWORKS_GET,
    &PCLOUD_NETWORKS_PUT,
    &PCLOUD_NETWORKS_PORTS_GETALL,
    &PCLOUD_NETWORKS_PORTS_POST,
    &PCLOUD_NETWORKS_PORTS_GET,
    &PCLOUD_NETWORKS_PORTS_PUT,
    &PCLOUD_PVMINSTANCES_GETALL,
    &PCLOUD_PVMINSTANCES_POST,
    &PCLOUD_PVMINSTANCES_GET,
    &PCLOUD_PVMINSTANCES_PUT,
    &PCLOUD_PVMINSTANCES_ACTION_POST,
    &PCLOUD_PVMINSTANCES_CAPTURE_POST,
    &PCLOUD_PVMINSTANCES_CLONE_POST,
    &PCLOUD_PVMINSTANCES_CONSOLE_GET,
    &PCLOUD_PVMINSTANCES_CONSOLE_POST,
    &PCLOUD_PVMINSTANCES_CONSOLE_PUT,
    &PCLOUD_PVMINSTANCES_NETWORKS_GETALL,
    &PCLOUD_PVMINSTANCES_NETWORKS_POST,
    &PCLOUD_PVMINSTANCES_NETWORKS_GET,
    &PCLOUD_PVMINSTANCES_OPERATIONS_POST,
    &PCLOUD_PVMINSTANCES_SNAPSHOTS_GETALL,
    &PCLOUD_PVMINSTANCES_SNAPSHOTS_POST,
    &PCLOUD_PVMINSTANCES_SNAPSHOTS_RESTORE_POST,
    &PCLOUD_V2_PVMINSTANCES_GETALL,
    &PCLOUD_V2_PVMINSTANCES_CAPTURE_GET,
    &PCLOUD_V2_PVMINSTANCES_CAPTURE_POST,
    &PCLOUD_PLACEMENTGROUPS_GETALL,
    &PCLOUD_PLACEMENTGROUPS_POST,
    &PCLOUD_PLACEMENTGROUPS_GET,
    &PCLOUD_PLACEMENTGROUPS_MEMBERS_POST,
    &PCLOUD_SAP_GETALL,
    &PCLOUD_SAP_POST,
    &PCLOUD_SAP_GET,
    &PCLOUD_SPPPLACEMENTGROUPS_GETALL,
    &PCLOUD_SPPPLACEMENTGROUPS_POST,
    &PCLOUD_SPPPLACEMENTGROUPS_GET,
    &PCLOUD_SPPPLACEMENTGROUPS_MEMBERS_POST,
    &PCLOUD_DHCP_GETALL,
    &PCLOUD_DHCP_POST,
    &PCLOUD_DHCP_GET,
    &PCLOUD_SHAREDPROCESSORPOOLS_GETALL,
    &PCLOUD_SHAREDPROCESSORPOOLS_POST,
    &PCLOUD_SHAREDPROCESSORPOOLS_GET,
    &PCLOUD_SHAREDPROCESSORPOOLS_PUT,
    &PCLOUD_CLOUDINSTANCES_SNAPSHOTS_GETALL,
    &PCLOUD_CLOUDINSTANCES_SNAPSHOTS_GET,
    &PCLOUD_CLOUDINSTANCES_SNAPSHOTS_PUT,
    &PCLOUD_STORAGECAPACITY_POOLS_GETALL,
    &PCLOUD_STORAGECAPACITY_POOLS_GET,
    &PCLOUD_STORAGECAPACITY_TYPES_GETALL,
    &PCLOUD_STORAGECAPACITY_TYPES_GET,
    &PCLOUD_SYSTEMPOOLS_GET,
    &PCLOUD_TASKS_GET,
    &PCLOUD_TENANTS_GET,
    &PCLOUD_TENANTS_PUT,
    &PCLOUD_TENANTS_SSHKEYS_GETALL,
    &PCLOUD_TENANTS_SSHKEYS_POST,
    &PCLOUD_TENANTS_SSHKEYS_GET,
    &PCLOUD_TENANTS_SSHKEYS_PUT,
    &PCLOUD_VPNCONNECTIONS_GETALL,
    &PCLOUD_VPNCONNECTIONS_POST,
    &PCLOUD_VPNCONNECTIONS_GET,
    &PCLOUD_VPNCONNECTIONS_PUT,
    &PCLOUD_VPNCONNECTIONS_NETWORKS_GET,
    &PCLOUD_VPNCONNECTIONS_NETWORKS_PUT,
    &PCLOUD_VPNCONNECTIONS_PEERSUBNETS_GET,
    &PCLOUD_VPNCONNECTIONS_PEERSUBNETS_PUT,
    &PCLOUD_IKEPOLICIES_GETALL,
    &PCLOUD_IKEPOLICIES_POST,
    &PCLOUD_IKEPOLICIES_GET,
    &PCLOUD_IKEPOLICIES_PUT,
    &PCLOUD_IPSECPOLICIES_GETALL,
    &PCLOUD_IPSECPOLICIES_POST,
    &PCLOUD_IPSECPOLICIES_GET,
    &PCLOUD_IPSECPOLICIES_PUT,
    &PCLOUD_VOLUMEGROUPS_GETALL,
    &PCLOUD_VOLUMEGROUPS_POST,
    &PCLOUD_VOLUMEGROUPS_GETALL_DETAILS,
    &PCLOUD_VOLUMEGROUPS_GET,
    &PCLOUD_VOLUMEGROUPS_PUT,
    &PCLOUD_VOLUMEGROUPS_ACTION_POST,
    &PCLOUD_VOLUMEGROUPS_GET_DETAILS,
    &PCLOUD_VOLUMEGROUPS_REMOTE_COPY_RELATIONSHIPS_GET,
    &PCLOUD_VOLUMEGROUPS_STORAGE_DETAILS_GET,
    &PCLOUD_VOLUME_ONBOARDING_GETALL,
    &PCLOUD_VOLUME_ONBOARDING_POST,
    &PCLOUD_VOLUME_ONBOARDING_GET,
    &PCLOUD_PVMINSTANCES_VOLUMES_GETALL,
    &PCLOUD_PVMINSTANCES_VOLUMES_GET,
    &PCLOUD_PVMINSTANCES_VOLUMES_POST,
    &PCLOUD_PVMINSTANCES_VOLUMES_PUT,
    &PCLOUD_PVMINSTANCES_VOLUMES_SETBOOT_PUT,
    &PCLOUD_CLOUDINSTANCES_VOLUMES_GETALL,
    &PCLOUD_CLOUDINSTANCES_VOLUMES_POST,
    &PCLOUD_VOLUMES_CLONE_POST,
    &PCLOUD_CLOUDINSTANCES_VOLUMES_GET,
    &PCLOUD_CLOUDINSTANCES_VOLUMES_PUT,
    &PCLOUD_CLOUDINSTANCES_VOLUMES_ACTION_POST,
    &PCLOUD_CLOUDINSTANCES_VOLUMES_FLASH_COPY_MAPPINGS_GET,
    &PCLOUD_CLOUDINSTANCES_VOLUMES_REMOTE_COPY_RELATIONSHIP_GET,
    &PCLOUD_V2_PVMINSTANCES_VOLUMES_POST,
    &PCLOUD_V2_VOLUMES_POST,
    &PCLOUD_V2_VOLUMESCLONE_GETALL,
    &PCLOUD_V2_VOLUMESCLONE_POST,
    &PCLOUD_V2_VOLUMESCLONE_GET,
    &PCLOUD_V2_VOLUMESCLONE_CANCEL_POST,
    &PCLOUD_V2_VOLUMESCLONE_EXECUTE_POST,
    &PCLOUD_V2_VOLUMESCLONE_START_POST,
    &PCLOUD_V2_VOLUMES_CLONE_POST,
    &PCLOUD_V2_VOLUMES_CLONETASKS_GET,
    &SERVICE_BINDING_GET,
    &SERVICE_BINDING_BINDING,
    &SERVICE_BINDING_LAST_OPERATION_GET,
    &SERVICE_INSTANCE_GET,
    &SERVICE_INSTANCE_UPDATE,
    &SERVICE_INSTANCE_PROVISION,
    &SERVICE_INSTANCE_LAST_OPERATION_GET,
    &SERVICE_BROKER_STORAGETYPES_GET,
    &SERVICE_BROKER_SWAGGERSPEC,
    &PCLOUD_CLOUDCONNECTIONS_DELETE,
    &PCLOUD_CLOUDCONNECTIONS_NETWORKS_DELETE,
    &PCLOUD_CLOUDINSTANCES_IMAGES_DELETE,
    &PCLOUD_CLOUDINSTANCES_DELETE,
    &PCLOUD_CLOUDINSTANCES_JOBS_DELETE,
    &PCLOUD_NETWORKS_DELETE,
    &PCLOUD_NETWORKS_PORTS_DELETE,
    &PCLOUD_PVMINSTANCES_DELETE,
    &PCLOUD_PVMINSTANCES_NETWORKS_DELETE,
    &PCLOUD_PLACEMENTGROUPS_DELETE,
    &PCLOUD_PLACEMENTGROUPS_MEMBERS_DELETE,
    &PCLOUD_SPPPLACEMENTGROUPS_DELETE,
    &PCLOUD_SPPPLACEMENTGROUPS_MEMBERS_DELETE,
    &PCLOUD_DHCP_DELETE,
    &PCLOUD_SHAREDPROCESSORPOOLS_DELETE,
    &PCLOUD_CLOUDINSTANCES_SNAPSHOTS_DELETE,
    &PCLOUD_TASKS_DELETE,
    &PCLOUD_TENANTS_SSHKEYS_DELETE,
    &PCLOUD_VPNCONNECTIONS_DELETE,
    &PCLOUD_VPNCONNECTIONS_NETWORKS_DELETE,
    &PCLOUD_VPNCONNECTIONS_PEERSUBNETS_DELETE,
    &PCLOUD_IKEPOLICIES_DELETE,
    &PCLOUD_IPSECPOLICIES_DELETE,
    &PCLOUD_VOLUMEGROUPS_DELETE,
    &PCLOUD_PVMINSTANCES_VOLUMES_DELETE,
    &PCLOUD_CLOUDINSTANCES_VOLUMES_DELETE,
    &PCLOUD_V2_VOLUMESCLONE_DELETE,
    &SERVICE_BINDING_UNBINDING,
    &SERVICE_INSTANCE_DEPROVISION,
];

/// Look an operation up by its identifier, e.g. `PcloudPvminstancesGet`.
#[must_use]
pub fn find(id: &str) -> Option<&'static Operation> {
    ALL.iter().copied().find(|op| op.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use powervs_core::operation::Location;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_complete_and_unique() {
        assert_eq!(ALL.len(), 207);
        let ids: HashSet<_> = ALL.iter().map(|op| op.id).collect();
        assert_eq!(ids.len(), ALL.len());
        let header_ids: HashSet<_> = ALL.iter().map(|op| op.header_id()).collect();
        assert_eq!(header_ids.len(), ALL.len());
    }

    #[test]
    fn every_placeholder_is_a_declared_path_param() {
        for op in ALL {
            let placeholders: Vec<_> = op.path_placeholders().collect();
            let declared: Vec<_> = op.params_in(Location::Path).map(|p| p.name).collect();
            assert_eq!(placeholders, declared, "{op}");
        }
    }

    #[test]
    fn body_members_imply_a_body() {
        for op in ALL {
            if op.params_in(Location::Body).next().is_some() {
                assert!(op.body, "{op}");
            }
            assert!(op.path.starts_with('/'), "{op}");
        }
    }

    #[test]
    fn find_by_id() {
        let op = find("PcloudPvminstancesGet").unwrap();
        assert_eq!(op.method, Method::Get);
        assert_eq!(
            op.path,
            "/pcloud/v1/cloud-instances/{cloud_instance_id}/pvm-instances/{pvm_instance_id}"
        );
        assert_eq!(find("ServiceBrokerHealthHead").unwrap().method, Method::Head);
        assert_eq!(find("ServiceInstanceUpdate").unwrap().method, Method::Patch);
        assert!(find("pcloudPvminstancesGet").is_none());
    }

    #[test]
    fn success_codes_follow_the_api() {
        assert_eq!(PCLOUD_CLOUDINSTANCES_VOLUMES_POST.success, 202);
        assert_eq!(PCLOUD_PVMINSTANCES_ACTION_POST.success, 200);
        assert_eq!(SERVICE_BROKER_HEALTH.success, 200);
    }
}
