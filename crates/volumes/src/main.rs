// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use plfanzen_volumes::VolumeManifest;

fn main() {
    // stdout carries the synthesized YAML
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let manifest_path = PathBuf::from(
        std::env::args()
            .nth(1)
            .or_else(|| std::env::var("VOLUMES_FILE").ok())
            .unwrap_or_else(|| "volumes.yml".into()),
    );
    tracing::info!(path = %manifest_path.display(), "Synthesizing volumes");
    let manifest = VolumeManifest::from_path(&manifest_path).expect("Failed to load volume manifest");
    let yaml = manifest
        .synthesize_yaml()
        .expect("Failed to synthesize volumes");
    print!("{}", yaml);
}
