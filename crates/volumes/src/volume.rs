// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

mod claim;
mod config_map;
mod empty_dir;
mod mount;
mod secret;

pub use claim::{ClaimRef, ClaimVolumeOptions};
pub use config_map::{ConfigMapRef, ConfigMapVolumeOptions, PathMapping};
pub use empty_dir::{EmptyDirMedium, EmptyDirVolumeOptions};
pub use mount::{MountOptions, MountPropagation};
pub use secret::{SecretRef, SecretVolumeOptions};

use claim::ClaimSource;
use config_map::KeyProjectionSource;
use empty_dir::EmptyDirSource;

/// A named volume that can be mounted by the containers of a pod.
///
/// Volumes are built once through one of the `from_*` constructors and are
/// immutable afterwards. The Kubernetes representation is produced when the
/// owning pod is synthesized, see [`crate::VolumeSet::into_pod_volumes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    name: String,
    source: VolumeSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum VolumeSource {
    ConfigMap(KeyProjectionSource),
    Secret(KeyProjectionSource),
    EmptyDir(EmptyDirSource),
    PersistentVolumeClaim(ClaimSource),
}

impl Volume {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn to_kube(&self) -> k8s_openapi::api::core::v1::Volume {
        match &self.source {
            VolumeSource::ConfigMap(source) => k8s_openapi::api::core::v1::Volume {
                name: self.name.clone(),
                config_map: Some(source.as_config_map_source()),
                ..Default::default()
            },
            VolumeSource::Secret(source) => k8s_openapi::api::core::v1::Volume {
                name: self.name.clone(),
                secret: Some(source.as_secret_source()),
                ..Default::default()
            },
            VolumeSource::EmptyDir(source) => k8s_openapi::api::core::v1::Volume {
                name: self.name.clone(),
                empty_dir: Some(source.to_kube()),
                ..Default::default()
            },
            VolumeSource::PersistentVolumeClaim(source) => k8s_openapi::api::core::v1::Volume {
                name: self.name.clone(),
                persistent_volume_claim: Some(source.to_kube()),
                ..Default::default()
            },
        }
    }
}
