// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::Volume;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPropagation {
    None,
    HostToContainer,
    Bidirectional,
}

impl MountPropagation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MountPropagation::None => "None",
            MountPropagation::HostToContainer => "HostToContainer",
            MountPropagation::Bidirectional => "Bidirectional",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Mount only this path of the volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path_expr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagation: Option<MountPropagation>,
}

impl Volume {
    /// Builds the container-side mount of this volume at `path`.
    pub fn mount(
        &self,
        path: impl Into<String>,
        options: MountOptions,
    ) -> k8s_openapi::api::core::v1::VolumeMount {
        k8s_openapi::api::core::v1::VolumeMount {
            name: self.name.clone(),
            mount_path: path.into(),
            read_only: options.read_only,
            sub_path: options.sub_path,
            sub_path_expr: options.sub_path_expr,
            mount_propagation: options.propagation.map(|p| p.as_str().to_string()),
            ..Default::default()
        }
    }
}
