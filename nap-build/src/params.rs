// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BuildType {
    #[default]
    Release,
    Debug,
}

impl BuildType {
    /// Form passed to the solution generator (`release`, `debug`).
    pub fn as_lower(self) -> &'static str {
        match self {
            BuildType::Release => "release",
            BuildType::Debug => "debug",
        }
    }

    /// Configuration name understood by xcodebuild and cmake (`Release`, `Debug`).
    pub fn capitalized(self) -> &'static str {
        match self {
            BuildType::Release => "Release",
            BuildType::Debug => "Debug",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_lower())
    }
}

/// Target used when no project name is given.
pub const ALL_TARGETS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildParams {
    pub target: String,
    pub build_type: BuildType,
    pub clean: bool,
    pub enable_python: bool,
}

impl BuildParams {
    pub fn builds_all_targets(&self) -> bool {
        self.target == ALL_TARGETS
    }
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            target: ALL_TARGETS.to_string(),
            build_type: BuildType::default(),
            clean: false,
            enable_python: false,
        }
    }
}
