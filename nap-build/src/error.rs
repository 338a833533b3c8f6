// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Step of the build that spawned a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    GenerateSolution,
    Build,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::GenerateSolution => f.write_str("solution generation"),
            Step::Build => f.write_str("build"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("could not locate the project root (no {script} found above {})", searched.display())]
    RootNotFound { script: &'static str, searched: PathBuf },

    #[error("project root {} is not a directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("cmake not found; install it or set NAP_CMAKE")]
    CmakeNotFound,

    #[error("failed to clean {}", path.display())]
    Clean {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{step} failed with exit code {code}")]
    StepFailed { step: Step, code: i32 },
}

impl BuildError {
    /// Exit code the process terminates with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::StepFailed { code, .. } => *code,
            BuildError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => 127,
                io::ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
