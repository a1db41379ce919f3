// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::cfg::CfgParser;
use crate::core::env::{Env, GetEnv};

const DEV_HOST: &str = "localhost";
const DEV_PORT: &str = "19000";
const DEV_ACCESS_KEY_ID: &str = "object_storage_root_user";
const DEV_SECRET_ACCESS_KEY: &str = "object_storage_root_password";

const DEFAULT_BUCKET: &str = "posthog";
const DEFAULT_SESSION_RECORDING_FOLDER: &str = "session_recordings";

/// S3-compatible object storage settings
///
/// Values are taken as they are: the port is not checked to be numeric and empty
/// connection settings are accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectStorageConfig {
    pub host: String,
    pub port: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub enabled: bool,
    pub bucket: String,
    /// Folder in the bucket where session recordings are stored
    pub session_recording_folder: String,
}

impl ObjectStorageConfig {
    /// Address of the storage, `None` if no host is configured.
    pub fn endpoint(&self) -> Option<String> {
        if self.host.is_empty() {
            return None;
        }

        if self.port.is_empty() {
            Some(format!("http://{}", self.host))
        } else {
            Some(format!("http://{}:{}", self.host, self.port))
        }
    }
}

impl<EnvGetter: GetEnv> CfgParser<EnvGetter> {
    /// Parse the object storage settings.
    ///
    /// With `dev_defaults` (test or debug mode) the connection settings point to the local
    /// development storage, otherwise they stay empty until configured.
    pub(super) fn parse_object_storage_cfg(
        env: &mut Env<EnvGetter>,
        dev_defaults: bool,
    ) -> ObjectStorageConfig {
        let default = |value: &str| {
            if dev_defaults {
                value.to_string()
            } else {
                String::new()
            }
        };

        ObjectStorageConfig {
            host: env.get("OBJECT_STORAGE_HOST", default(DEV_HOST)),
            port: env.get("OBJECT_STORAGE_PORT", default(DEV_PORT)),
            access_key_id: env
                .get_masked("OBJECT_STORAGE_ACCESS_KEY_ID", default(DEV_ACCESS_KEY_ID)),
            secret_access_key: env.get_masked(
                "OBJECT_STORAGE_SECRET_ACCESS_KEY",
                default(DEV_SECRET_ACCESS_KEY),
            ),
            enabled: env.get_flag("OBJECT_STORAGE_ENABLED", false),
            bucket: env.get("OBJECT_STORAGE_BUCKET", DEFAULT_BUCKET.to_string()),
            session_recording_folder: env.get(
                "OBJECT_STORAGE_SESSION_RECORDING_FOLDER",
                DEFAULT_SESSION_RECORDING_FOLDER.to_string(),
            ),
        }
    }
}
