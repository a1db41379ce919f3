// Copyright 2023-2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use hog_base::logger::Logger;
use hog_settings::cfg::CfgParser;
use hog_settings::core::env::StdEnvGetter;
use hog_settings::deployment::deployment_mode;
use log::{error, info};

fn main() {
    let version: &str = env!("CARGO_PKG_VERSION");

    Logger::init("INFO");
    info!(
        "Hog Settings {} [{} at {}]",
        version,
        env!("COMMIT"),
        env!("BUILD_TIME")
    );

    let parser = CfgParser::from_env(StdEnvGetter::default());
    Logger::init(&parser.cfg.log_level);

    info!("Configuration: \n {}", parser);

    let components = parser.build();
    let object_storage = &components.cfg.object_storage;
    if object_storage.enabled {
        info!(
            "Object storage: {} bucket '{}', session recordings in '{}'",
            object_storage
                .endpoint()
                .unwrap_or("(no endpoint)".to_string()),
            object_storage.bucket,
            object_storage.session_recording_folder
        );
    } else {
        info!("Object storage is disabled");
    }

    match deployment_mode(&components.cfg, components.license_repo.as_ref()) {
        Ok(mode) => info!("Deployment mode: {}", mode),
        Err(err) => {
            error!("Failed to detect deployment mode: {}", err);
            std::process::exit(1);
        }
    }
}
