// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use kube::ResourceExt;
use serde::{Deserialize, Serialize};

use super::{Volume, VolumeSource};

/// Anything that resolves to the name of a config map.
pub trait ConfigMapRef {
    fn config_map_name(&self) -> String;
}

impl ConfigMapRef for k8s_openapi::api::core::v1::ConfigMap {
    fn config_map_name(&self) -> String {
        self.name_any()
    }
}

impl ConfigMapRef for str {
    fn config_map_name(&self) -> String {
        self.to_string()
    }
}

impl ConfigMapRef for String {
    fn config_map_name(&self) -> String {
        self.clone()
    }
}

/// Where a single key of a config map (or secret) ends up inside the volume.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    /// Relative path of the file to map the key to
    pub path: String,
    /// File permission bits, overrides the volume's default mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigMapVolumeOptions {
    /// Volume name, defaults to the referenced object's name with a
    /// `configmap-` or `secret-` prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Mode bits applied to all projected files, e.g. `0o644`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i32>,
    /// Whether the pod may start if the referenced object or one of its keys is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Project only these keys instead of the whole object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<HashMap<String, PathMapping>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct KeyProjection {
    key: String,
    path: String,
    mode: Option<i32>,
}

/// Shared source shape of config map and secret volumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct KeyProjectionSource {
    reference: String,
    default_mode: Option<i32>,
    optional: Option<bool>,
    items: Option<Vec<KeyProjection>>,
}

impl KeyProjectionSource {
    pub(super) fn new(reference: String, options: &ConfigMapVolumeOptions) -> Self {
        KeyProjectionSource {
            reference,
            default_mode: options.default_mode,
            optional: options.optional,
            items: options.items.as_ref().map(project_items),
        }
    }

    fn kube_items(&self) -> Option<Vec<k8s_openapi::api::core::v1::KeyToPath>> {
        self.items.as_ref().map(|items| {
            items
                .iter()
                .map(|item| k8s_openapi::api::core::v1::KeyToPath {
                    key: item.key.clone(),
                    path: item.path.clone(),
                    mode: item.mode,
                })
                .collect()
        })
    }

    pub(super) fn as_config_map_source(&self) -> k8s_openapi::api::core::v1::ConfigMapVolumeSource {
        k8s_openapi::api::core::v1::ConfigMapVolumeSource {
            name: self.reference.clone(),
            default_mode: self.default_mode,
            optional: self.optional,
            items: self.kube_items(),
        }
    }

    pub(super) fn as_secret_source(&self) -> k8s_openapi::api::core::v1::SecretVolumeSource {
        k8s_openapi::api::core::v1::SecretVolumeSource {
            secret_name: Some(self.reference.clone()),
            default_mode: self.default_mode,
            optional: self.optional,
            items: self.kube_items(),
        }
    }
}

/// Converts the key mapping into a list sorted by key, so the synthesized
/// output never depends on the iteration order of the map.
fn project_items(items: &HashMap<String, PathMapping>) -> Vec<KeyProjection> {
    let mut projected: Vec<KeyProjection> = items
        .iter()
        .map(|(key, mapping)| KeyProjection {
            key: key.clone(),
            path: mapping.path.clone(),
            mode: mapping.mode,
        })
        .collect();
    projected.sort_by(|a, b| a.key.cmp(&b.key));
    let keys: Vec<&str> = projected.iter().map(|item| item.key.as_str()).collect();
    tracing::trace!(?keys, "Projected items");
    projected
}

impl Volume {
    /// Mounts a config map. Unless `options.name` is set, the volume is named
    /// after the config map, so repeated calls for the same config map yield
    /// the same volume name.
    pub fn from_config_map<R: ConfigMapRef + ?Sized>(
        config_map: &R,
        options: ConfigMapVolumeOptions,
    ) -> Self {
        let reference = config_map.config_map_name();
        let name = options
            .name
            .clone()
            .unwrap_or_else(|| format!("configmap-{}", reference));
        tracing::debug!(volume = %name, config_map = %reference, "Built config map volume");
        Volume {
            name,
            source: VolumeSource::ConfigMap(KeyProjectionSource::new(reference, &options)),
        }
    }
}
