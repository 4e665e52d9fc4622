// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::{Volume, VolumeSource};
use crate::size::{Size, SizeError};

/// Storage medium backing an empty directory.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EmptyDirMedium {
    /// Whatever the node's default storage is. Serialized as an empty string,
    /// which is not the same as leaving the medium unset.
    Default,
    /// A tmpfs (RAM-backed filesystem)
    Memory,
}

impl EmptyDirMedium {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyDirMedium::Default => "",
            EmptyDirMedium::Memory => "Memory",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmptyDirVolumeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<EmptyDirMedium>,
    /// Total amount of local storage the directory may use, must be a whole
    /// number of mebibytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_limit: Option<Size>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct EmptyDirSource {
    medium: Option<EmptyDirMedium>,
    size_limit: Option<String>,
}

impl EmptyDirSource {
    pub(super) fn to_kube(&self) -> k8s_openapi::api::core::v1::EmptyDirVolumeSource {
        k8s_openapi::api::core::v1::EmptyDirVolumeSource {
            medium: self.medium.map(|medium| medium.as_str().to_string()),
            size_limit: self
                .size_limit
                .clone()
                .map(k8s_openapi::apimachinery::pkg::api::resource::Quantity),
        }
    }
}

impl Volume {
    /// Creates a scratch directory that lives as long as the pod. The size
    /// limit is converted up front, so an invalid size fails here and not at
    /// synthesis time.
    pub fn from_empty_dir(
        name: impl Into<String>,
        options: EmptyDirVolumeOptions,
    ) -> Result<Self, SizeError> {
        let size_limit = options
            .size_limit
            .map(|size| size.to_quantity())
            .transpose()?
            .map(|quantity| quantity.0);
        let name = name.into();
        tracing::debug!(volume = %name, medium = ?options.medium, size_limit = ?size_limit, "Built empty dir volume");
        Ok(Volume {
            name,
            source: VolumeSource::EmptyDir(EmptyDirSource {
                medium: options.medium,
                size_limit,
            }),
        })
    }
}
