// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use kube::ResourceExt;
use serde::{Deserialize, Serialize};

use super::{Volume, VolumeSource};

pub trait ClaimRef {
    fn claim_name(&self) -> String;
}

impl ClaimRef for k8s_openapi::api::core::v1::PersistentVolumeClaim {
    fn claim_name(&self) -> String {
        self.name_any()
    }
}

impl ClaimRef for str {
    fn claim_name(&self) -> String {
        self.to_string()
    }
}

impl ClaimRef for String {
    fn claim_name(&self) -> String {
        self.clone()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimVolumeOptions {
    /// Volume name, defaults to `pvc-<claim name>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ClaimSource {
    claim_name: String,
    read_only: Option<bool>,
}

impl ClaimSource {
    pub(super) fn to_kube(&self) -> k8s_openapi::api::core::v1::PersistentVolumeClaimVolumeSource {
        k8s_openapi::api::core::v1::PersistentVolumeClaimVolumeSource {
            claim_name: self.claim_name.clone(),
            read_only: self.read_only,
        }
    }
}

impl Volume {
    /// Mounts an existing persistent volume claim.
    pub fn from_persistent_volume_claim<R: ClaimRef + ?Sized>(
        claim: &R,
        options: ClaimVolumeOptions,
    ) -> Self {
        let claim_name = claim.claim_name();
        let name = options
            .name
            .unwrap_or_else(|| format!("pvc-{}", claim_name));
        tracing::debug!(volume = %name, claim = %claim_name, "Built persistent volume claim volume");
        Volume {
            name,
            source: VolumeSource::PersistentVolumeClaim(ClaimSource {
                claim_name,
                read_only: options.read_only,
            }),
        }
    }
}
