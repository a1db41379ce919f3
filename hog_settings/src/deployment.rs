// Copyright 2023-2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::cfg::Cfg;
use crate::license::ManageLicenses;
use hog_base::error::{ErrorCode, HogError};
use log::debug;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeploymentMode {
    /// Hosted multi-tenant deployment
    Cloud,
    SelfHosted,
}

impl Display for DeploymentMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentMode::Cloud => write!(f, "cloud"),
            DeploymentMode::SelfHosted => write!(f, "self-hosted"),
        }
    }
}

/// Check if the deployment is a cloud instance.
///
/// The licensing capability is asked on every call. Without licensing in the build the
/// deployment is self-hosted. Without a valid license the `MULTI_TENANCY` flag decides,
/// otherwise the plan of the license does.
///
/// # Errors
///
/// Any error of the license lookup except the unavailable capability.
pub fn is_cloud(cfg: &Cfg, licenses: &dyn ManageLicenses) -> Result<bool, HogError> {
    match licenses.first_valid() {
        Ok(Some(license)) => {
            debug!("Deployment mode is taken from the '{}' license", license.plan);
            Ok(license.is_cloud())
        }
        Ok(None) => {
            debug!(
                "No valid license, MULTI_TENANCY={} decides the deployment mode",
                cfg.multi_tenancy
            );
            Ok(cfg.multi_tenancy)
        }
        Err(err) if err.status() == ErrorCode::NotImplemented => {
            debug!("{}, assuming a self-hosted deployment", err.message());
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

pub fn deployment_mode(
    cfg: &Cfg,
    licenses: &dyn ManageLicenses,
) -> Result<DeploymentMode, HogError> {
    if is_cloud(cfg, licenses)? {
        Ok(DeploymentMode::Cloud)
    } else {
        Ok(DeploymentMode::SelfHosted)
    }
}
