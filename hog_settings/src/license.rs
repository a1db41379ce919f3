// Copyright 2023-2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

mod disabled;
mod repo;

use crate::cfg::Cfg;
use crate::license::disabled::NoLicenseRepository;
use crate::license::repo::LicenseRepository;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hog_base::error::HogError;
use hog_base::{internal_server_error, unprocessable_entity};
use jsonwebtoken::{decode, DecodingKey, Validation};
use log::info;
use serde_json::de;
use std::path::Path;

/// Plan of the licenses issued to hosted multi-tenant deployments.
pub const CLOUD_PLAN: &str = "cloud";

/// A license of the deployment.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct License {
    pub licensee: String,
    pub invoice: String,
    pub expiry_date: DateTime<Utc>,
    pub plan: String,
    pub device_number: u32,
    pub disk_space: i32,
}

impl License {
    /// A license is valid until its expiry date.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date >= now
    }

    pub fn is_cloud(&self) -> bool {
        self.plan == CLOUD_PLAN
    }
}

#[derive(Debug, serde::Deserialize)]
struct LicenseFile {
    lic: String,
    key: String,
}

/// Read and verify a license file.
///
/// The file is a JSON object with a JWT (`lic`) signed with RS256 and the public key (`key`,
/// base64 encoded DER) to verify it. The `exp` claim is ignored, see [`License::is_valid_at`].
pub fn parse_license(license_path: &Path) -> Result<License, HogError> {
    let file = std::fs::read(license_path).map_err(|e| {
        internal_server_error!(
            "Failed to read license file {}: {}",
            license_path.display(),
            e
        )
    })?;

    let license_file = de::from_slice::<LicenseFile>(&file)
        .map_err(|e| unprocessable_entity!("Failed to parse license file: {}", e))?;

    let encoded_key = BASE64_STANDARD
        .decode(license_file.key.as_str())
        .map_err(|e| unprocessable_entity!("Failed to decode license key: {}", e))?;
    let decoding_key = DecodingKey::from_rsa_der(encoded_key.as_slice());

    let mut validation = Validation::new(jsonwebtoken::Algorithm::RS256);
    validation.validate_exp = false;
    let license = decode::<License>(license_file.lic.as_str(), &decoding_key, &validation)
        .map_err(|e| unprocessable_entity!("Failed to parse license: {}", e))?;

    Ok(license.claims)
}

/// Licensing capability of the deployment.
pub trait ManageLicenses {
    /// Get the first license which is valid now.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` if there is no valid license.
    /// * `Err` with `ErrorCode::NotImplemented` if licensing isn't available in this build.
    fn first_valid(&self) -> Result<Option<License>, HogError>;
}

pub type BoxedLicenseRepository = Box<dyn ManageLicenses + Send + Sync>;

/// Create the licensing capability chosen by the build configuration.
///
/// Builds with the `ee` feature read licenses from `LICENSE_PATH`, other builds have no
/// licensing at all.
pub fn create_license_repository(cfg: &Cfg) -> BoxedLicenseRepository {
    if cfg!(feature = "ee") {
        info!(
            "Licensing is enabled, license path: {}",
            cfg.license_path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or("(none)".to_string())
        );
        Box::new(LicenseRepository::new(cfg.license_path.clone()))
    } else {
        info!("Licensing is not available in this build");
        Box::new(NoLicenseRepository::new())
    }
}
