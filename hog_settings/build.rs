// Copyright 2023-2025 ReductSoftware UG
// Licensed under the Business Source License 1.1
use std::env;
use std::time::SystemTime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // get build time and commit
    let build_time = chrono::DateTime::<chrono::Utc>::from(SystemTime::now())
        .to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let commit = match std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)?,
        _ => env::var("GIT_COMMIT").unwrap_or("unknown".to_string()),
    };

    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
    println!("cargo:rustc-env=COMMIT={}", commit.trim());
    Ok(())
}
