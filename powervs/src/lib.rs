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

//! Client for the IBM Power Virtual Server (Power Cloud) REST API.
//!
//! [`PowervsV1`] exposes every operation of the [`operations`] catalog
//! through [`PowervsV1::call`] and typed methods for the common ones.
//!
//! ```rust,no_run
//! use powervs::options::PvmInstancesGetallOptions;
//! use powervs::PowervsV1;
//!
//! # async fn example() -> Result<(), powervs::Error> {
//! // POWERVS_URL, POWERVS_AUTH_TYPE, ... from ibm-credentials.env or the environment.
//! let service = PowervsV1::from_external_config(powervs::DEFAULT_SERVICE_NAME)?;
//! let (instances, _) = service
//!     .pcloud_pvminstances_getall(&PvmInstancesGetallOptions::new("cloud-instance-id"))
//!     .await?;
//! for instance in instances.pvm_instances {
//!     println!("{} {:?}", instance.server_name, instance.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod operations;
pub mod options;
mod service;

#[doc(inline)]
pub use service::PowervsV1;
#[doc(inline)]
pub use service::PowervsV1Options;

#[doc(inline)]
pub use powervs_core::CallResult;
#[doc(inline)]
pub use powervs_core::DetailedResponse;
#[doc(inline)]
pub use powervs_core::Empty;
#[doc(inline)]
pub use powervs_core::Error;
#[doc(inline)]
pub use powervs_core::Params;

/// Service name used to look up external configuration.
pub const DEFAULT_SERVICE_NAME: &str = "powervs";

/// Global endpoint of the service.
pub const DEFAULT_SERVICE_URL: &str = "https://power-iaas.cloud.ibm.com";

/// Name sent in the SDK headers.
pub const SERVICE_NAME: &str = "powervs";

pub const SERVICE_VERSION: &str = "V1";

/// Endpoint of a regional deployment, e.g. `us-south` or `eu-de`.
///
/// # Errors
///
/// Returns [`Error::Config`] if `region` is not a region identifier.
pub fn service_url_for_region(region: &str) -> Result<String, Error> {
    let valid = !region.is_empty()
        && !region.starts_with('-')
        && !region.ends_with('-')
        && region
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if valid {
        Ok(format!("https://{region}.power-iaas.cloud.ibm.com"))
    } else {
        Err(Error::Config(format!("invalid region '{region}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_urls() {
        assert_eq!(
            service_url_for_region("us-south").unwrap(),
            "https://us-south.power-iaas.cloud.ibm.com"
        );
        assert!(matches!(service_url_for_region(""), Err(Error::Config(_))));
        assert!(service_url_for_region("US South").is_err());
        assert!(service_url_for_region("eu-").is_err());
    }
}
