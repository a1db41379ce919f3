// Copyright 2023-2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::license::{parse_license, License, ManageLicenses};
use chrono::Utc;
use hog_base::error::HogError;
use hog_base::not_found;
use log::debug;
use std::path::{Path, PathBuf};

/// Licenses stored in a file or in a folder of files.
///
/// The files are read on every lookup, so a renewed license is picked up without a restart.
pub(super) struct LicenseRepository {
    path: Option<PathBuf>,
}

impl LicenseRepository {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn license_files(path: &Path) -> Result<Vec<PathBuf>, HogError> {
        if !path.exists() {
            return Err(not_found!("License path {} doesn't exist", path.display()));
        }

        if !path.is_dir() {
            return Ok(vec![path.to_path_buf()]);
        }

        let mut files = vec![];
        for entry in std::fs::read_dir(path)? {
            let file = entry?.path();
            if file.is_file() {
                files.push(file);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl ManageLicenses for LicenseRepository {
    fn first_valid(&self) -> Result<Option<License>, HogError> {
        let path = match &self.path {
            Some(path) => path,
            None => return Ok(None),
        };

        let now = Utc::now();
        for file in Self::license_files(path)? {
            let license = parse_license(&file)?;
            if license.is_valid_at(now) {
                debug!(
                    "Valid license '{}' for {} in {}",
                    license.plan,
                    license.licensee,
                    file.display()
                );
                return Ok(Some(license));
            }

            debug!(
                "License in {} expired at {}",
                file.display(),
                license.expiry_date
            );
        }

        Ok(None)
    }
}
