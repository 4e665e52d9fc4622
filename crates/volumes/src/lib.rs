// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Builders for the volumes of a Kubernetes pod spec.
//!
//! ```
//! use plfanzen_volumes::{ConfigMapVolumeOptions, Volume, VolumeSet};
//!
//! let mut volumes = VolumeSet::new();
//! volumes
//!     .add(Volume::from_config_map("nginx", ConfigMapVolumeOptions::default()))
//!     .unwrap();
//! let pod_volumes = volumes.into_pod_volumes();
//! assert_eq!(pod_volumes[0].name, "configmap-nginx");
//! ```

mod manifest;
mod size;
mod volume;
mod volume_set;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use manifest::{ManifestError, VolumeDescriptor, VolumeManifest};
pub use size::{Size, SizeError, SizeRoundingBehavior, SizeUnit};
pub use volume::{
    ClaimRef, ClaimVolumeOptions, ConfigMapRef, ConfigMapVolumeOptions, EmptyDirMedium,
    EmptyDirVolumeOptions, MountOptions, MountPropagation, PathMapping, SecretRef,
    SecretVolumeOptions, Volume,
};
pub use volume_set::{VolumeSet, VolumeSetError};
