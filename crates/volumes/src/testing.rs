// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Test helpers. Only compiled for this crate's tests or with the
//! `test-support` feature.

use crate::volume::Volume;

/// The Kubernetes representation of a single volume, as it would appear in a
/// synthesized pod spec.
pub fn volume_spec(volume: &Volume) -> k8s_openapi::api::core::v1::Volume {
    volume.to_kube()
}
