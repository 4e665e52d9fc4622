// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    size::SizeError,
    volume::{
        ClaimVolumeOptions, ConfigMapVolumeOptions, EmptyDirVolumeOptions, SecretVolumeOptions,
        Volume,
    },
    volume_set::{VolumeSet, VolumeSetError},
};

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {0}: {1}")]
    Read(String, std::io::Error),
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Failed to serialize volumes: {0}")]
    Serialize(serde_yaml::Error),
    #[error(transparent)]
    Size(#[from] SizeError),
    #[error(transparent)]
    VolumeSet(#[from] VolumeSetError),
}

/// A single volume, as written in a `volumes.yml` file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VolumeDescriptor {
    #[serde(rename_all = "camelCase")]
    ConfigMap {
        config_map: String,
        #[serde(default)]
        options: ConfigMapVolumeOptions,
    },
    #[serde(rename_all = "camelCase")]
    Secret {
        secret: String,
        #[serde(default)]
        options: SecretVolumeOptions,
    },
    #[serde(rename_all = "camelCase")]
    EmptyDir {
        name: String,
        #[serde(default)]
        options: EmptyDirVolumeOptions,
    },
    #[serde(rename_all = "camelCase")]
    PersistentVolumeClaim {
        claim: String,
        #[serde(default)]
        options: ClaimVolumeOptions,
    },
}

impl VolumeDescriptor {
    pub fn build(&self) -> Result<Volume, SizeError> {
        match self {
            VolumeDescriptor::ConfigMap {
                config_map,
                options,
            } => Ok(Volume::from_config_map(config_map, options.clone())),
            VolumeDescriptor::Secret { secret, options } => {
                Ok(Volume::from_secret(secret, options.clone()))
            }
            VolumeDescriptor::EmptyDir { name, options } => {
                Volume::from_empty_dir(name.clone(), options.clone())
            }
            VolumeDescriptor::PersistentVolumeClaim { claim, options } => {
                Ok(Volume::from_persistent_volume_claim(claim, options.clone()))
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeManifest {
    #[serde(default)]
    pub volumes: Vec<VolumeDescriptor>,
}

impl VolumeManifest {
    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let file = std::fs::File::open(path)
            .map_err(|e| ManifestError::Read(path.display().to_string(), e))?;
        Ok(serde_yaml::from_reader(file)?)
    }

    pub fn build(&self) -> Result<VolumeSet, ManifestError> {
        let mut set = VolumeSet::new();
        for descriptor in &self.volumes {
            set.add(descriptor.build()?)?;
        }
        tracing::debug!(count = set.len(), "Built volumes from manifest");
        Ok(set)
    }

    /// Renders the pod `volumes` list as YAML.
    pub fn synthesize_yaml(&self) -> Result<String, ManifestError> {
        let volumes = self.build()?.into_pod_volumes();
        serde_yaml::to_string(&volumes).map_err(ManifestError::Serialize)
    }
}
