// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use kube::ResourceExt;

use super::{ConfigMapVolumeOptions, Volume, VolumeSource, config_map::KeyProjectionSource};

/// Secret volumes accept the same options as config map volumes, the default
/// volume name is `secret-<secret name>`.
pub type SecretVolumeOptions = ConfigMapVolumeOptions;

pub trait SecretRef {
    fn secret_name(&self) -> String;
}

impl SecretRef for k8s_openapi::api::core::v1::Secret {
    fn secret_name(&self) -> String {
        self.name_any()
    }
}

impl SecretRef for str {
    fn secret_name(&self) -> String {
        self.to_string()
    }
}

impl SecretRef for String {
    fn secret_name(&self) -> String {
        self.clone()
    }
}

impl Volume {
    pub fn from_secret<R: SecretRef + ?Sized>(secret: &R, options: SecretVolumeOptions) -> Self {
        let reference = secret.secret_name();
        let name = options
            .name
            .clone()
            .unwrap_or_else(|| format!("secret-{}", reference));
        tracing::debug!(volume = %name, secret = %reference, "Built secret volume");
        Volume {
            name,
            source: VolumeSource::Secret(KeyProjectionSource::new(reference, &options)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{PathMapping, testing::volume_spec};

    #[test]
    fn test_minimal_definition() {
        let vol = Volume::from_secret("db-credentials", SecretVolumeOptions::default());
        assert_eq!(
            serde_json::to_value(volume_spec(&vol)).unwrap(),
            serde_json::json!({
                "name": "secret-db-credentials",
                "secret": {
                    "secretName": "db-credentials",
                },
            })
        );
    }

    #[test]
    fn test_secret_object_reference() {
        let secret = k8s_openapi::api::core::v1::Secret {
            metadata: k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta {
                name: Some("tls".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let vol = Volume::from_secret(
            &secret,
            SecretVolumeOptions {
                name: Some("certs".to_string()),
                default_mode: Some(0o400),
                optional: Some(false),
                items: Some(HashMap::from([
                    (
                        "tls.key".to_string(),
                        PathMapping {
                            path: "server.key".to_string(),
                            mode: None,
                        },
                    ),
                    (
                        "tls.crt".to_string(),
                        PathMapping {
                            path: "server.crt".to_string(),
                            mode: Some(0o444),
                        },
                    ),
                ])),
            },
        );
        assert_eq!(
            serde_json::to_value(volume_spec(&vol)).unwrap(),
            serde_json::json!({
                "name": "certs",
                "secret": {
                    "secretName": "tls",
                    "defaultMode": 0o400,
                    "optional": false,
                    "items": [
                        { "key": "tls.crt", "path": "server.crt", "mode": 0o444 },
                        { "key": "tls.key", "path": "server.key" },
                    ],
                },
            })
        );
    }

    #[test]
    fn test_secret_and_config_map_names_do_not_collide() {
        let secret = Volume::from_secret("app", SecretVolumeOptions::default());
        let config_map = Volume::from_config_map("app", ConfigMapVolumeOptions::default());
        assert_ne!(secret.name(), config_map.name());
    }
}
