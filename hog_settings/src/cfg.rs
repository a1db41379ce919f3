// Copyright 2023-2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

pub mod object_storage;

use crate::cfg::object_storage::ObjectStorageConfig;
use crate::core::env::{Env, GetEnv};
use crate::license::{create_license_repository, BoxedLicenseRepository};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Process-wide configuration, built once at startup and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Cfg {
    pub log_level: String,
    /// The process runs the test suite.
    pub test: bool,
    pub debug: bool,
    /// The deployment serves many tenants.
    pub multi_tenancy: bool,
    /// A license file or a folder with license files.
    pub license_path: Option<PathBuf>,
    pub object_storage: ObjectStorageConfig,
}

impl Cfg {
    /// Developer defaults are used for local services.
    pub fn is_dev(&self) -> bool {
        self.test || self.debug
    }
}

/// Runtime components built from the configuration.
pub struct Components {
    pub cfg: Cfg,
    pub license_repo: BoxedLicenseRepository,
}

/// Reads the configuration from the environment.
pub struct CfgParser<EnvGetter: GetEnv> {
    pub cfg: Cfg,
    env: Env<EnvGetter>,
}

impl<EnvGetter: GetEnv> CfgParser<EnvGetter> {
    pub fn from_env(getter: EnvGetter) -> Self {
        let mut env = Env::new(getter);

        let log_level = env.get("LOG_LEVEL", DEFAULT_LOG_LEVEL.to_string());
        let test = env.get_flag("TEST", false);
        let debug = env.get_flag("DEBUG", false);
        let multi_tenancy = env.get_flag("MULTI_TENANCY", false);
        let license_path = env
            .get_optional::<String>("LICENSE_PATH")
            .map(PathBuf::from);
        let object_storage = Self::parse_object_storage_cfg(&mut env, test || debug);

        CfgParser {
            cfg: Cfg {
                log_level,
                test,
                debug,
                multi_tenancy,
                license_path,
                object_storage,
            },
            env,
        }
    }

    pub fn build(self) -> Components {
        let license_repo = create_license_repository(&self.cfg);
        Components {
            cfg: self.cfg,
            license_repo,
        }
    }
}

impl<EnvGetter: GetEnv> Display for CfgParser<EnvGetter> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.env.message())
    }
}
