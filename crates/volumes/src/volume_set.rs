// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use indexmap::IndexMap;
use thiserror::Error;

use crate::volume::Volume;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VolumeSetError {
    #[error("A different volume named {0} already exists")]
    DuplicateName(String),
}

/// The volumes of a single pod, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct VolumeSet {
    volumes: IndexMap<String, Volume>,
}

impl VolumeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a volume to the pod.
    ///
    /// Adding the exact same volume twice is a no-op, this happens whenever two
    /// containers mount the same config map through its implicit volume name.
    /// A different volume reusing an existing name is rejected.
    pub fn add(&mut self, volume: Volume) -> Result<(), VolumeSetError> {
        match self.volumes.get(volume.name()) {
            Some(existing) if *existing == volume => {
                tracing::debug!(volume = %volume.name(), "Volume already present, skipping");
                Ok(())
            }
            Some(_) => Err(VolumeSetError::DuplicateName(volume.name().to_string())),
            None => {
                self.volumes.insert(volume.name().to_string(), volume);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Volume> {
        self.volumes.get(name)
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Volume> {
        self.volumes.values()
    }

    /// Synthesizes the `volumes` list of the pod spec.
    pub fn into_pod_volumes(self) -> Vec<k8s_openapi::api::core::v1::Volume> {
        self.volumes.values().map(Volume::to_kube).collect()
    }
}
