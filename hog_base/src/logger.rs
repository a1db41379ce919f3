// Copyright 2023-2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::prelude::{DateTime, Utc};
use log::{warn, Level, Log, Metadata, Record};
use std::collections::BTreeMap;
use std::sync::{LazyLock, RwLock};

static LOGGER: Logger = Logger;

/// Module path (with `/` separators) to the maximum enabled level. The empty path is the root.
type LevelMap = BTreeMap<String, Level>;

static PATHS: LazyLock<RwLock<LevelMap>> = LazyLock::new(|| RwLock::new(LevelMap::new()));

pub struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let paths = match PATHS.read() {
            Ok(paths) => paths,
            Err(_) => return false,
        };
        level_for_target(&paths, metadata.target())
            .map(|level| metadata.level() <= level)
            .unwrap_or(false)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now: DateTime<Utc> = Utc::now();
        let file = record
            .file()
            .map(|file| file.split_once("src/").map_or(file, |(_, tail)| tail))
            .unwrap_or("(unknown)");
        let package_name = record
            .target()
            .split_once(':')
            .map_or(record.target(), |(package, _)| package);

        println!(
            "{} ({:>5}) [{}] -- {}/{}:{} {}",
            now.format("%Y-%m-%d %H:%M:%S.%3f"),
            thread_id::get() % 100000,
            record.level(),
            package_name,
            file,
            record.line().unwrap_or(0),
            record.args(),
        );
    }

    fn flush(&self) {}
}

/// Most specific configured path wins.
fn level_for_target(paths: &LevelMap, target: &str) -> Option<Level> {
    let target = target.replace("::", "/");
    paths
        .iter()
        .rev()
        .find(|(path, _)| path.is_empty() || target.starts_with(path.as_str()))
        .map(|(_, level)| *level)
}

fn parse_level(level: &str) -> Option<Level> {
    match level.trim().to_uppercase().as_str() {
        "TRACE" => Some(Level::Trace),
        "DEBUG" => Some(Level::Debug),
        "INFO" => Some(Level::Info),
        "WARN" => Some(Level::Warn),
        "ERROR" => Some(Level::Error),
        _ => None,
    }
}

/// Parses `INFO,path=DEBUG,crate/module=ERROR`. Returns the levels and the names that were invalid.
fn parse_levels(levels: &str) -> (LevelMap, Vec<String>) {
    let mut paths = LevelMap::new();
    paths.insert(String::new(), Level::Info);

    let mut invalid = Vec::new();
    for item in levels.split(',').filter(|item| !item.trim().is_empty()) {
        let (path, level) = match item.split_once('=') {
            Some((path, level)) => (path.trim(), level),
            None => ("", item),
        };

        let level = parse_level(level).unwrap_or_else(|| {
            invalid.push(level.trim().to_string());
            Level::Info
        });
        paths.insert(path.to_string(), level);
    }

    (paths, invalid)
}

impl Logger {
    /// Initialize the logger.
    ///
    /// # Arguments
    ///
    /// * `levels` - Comma separated levels, e.g. `INFO,hog_settings/license=DEBUG`.
    ///   Can be one of TRACE, DEBUG, INFO, WARN, ERROR. Invalid levels fall back to INFO.
    pub fn init(levels: &str) {
        let (paths, invalid) = parse_levels(levels);
        let max_level = paths.values().copied().max().unwrap_or(Level::Info);

        if let Ok(mut global) = PATHS.write() {
            *global = paths;
        }

        log::set_logger(&LOGGER).ok();
        log::set_max_level(max_level.to_level_filter());

        for level in invalid {
            warn!("Invalid log level: {}, defaulting to INFO", level);
        }
    }
}
