// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Clean, generate the solution, then build.
//!
//! Steps run strictly in order and the first failure ends the run.

use std::fs;

use crate::commands::{build_command, solution_command};
use crate::error::{BuildError, Result, Step};
use crate::exec::{Invocation, Runner};
use crate::host::{Host, Toolchain};
use crate::params::BuildParams;

pub fn run(host: &Host, params: &BuildParams, toolchain: &Toolchain, runner: &mut dyn Runner) -> Result<()> {
    if params.clean {
        clean(host)?;
    }

    let solution = solution_command(host, params);
    run_step(runner, Step::GenerateSolution, &solution)?;

    let build = build_command(host, params, toolchain)?;
    run_step(runner, Step::Build, &build)?;

    Ok(())
}

/// Removes the build directory if present.
pub fn clean(host: &Host) -> Result<()> {
    let dir = &host.build_dir;
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "nothing to clean");
        return Ok(());
    }

    println!("  Removing {}", dir.display());
    fs::remove_dir_all(dir).map_err(|source| BuildError::Clean {
        path: dir.clone(),
        source,
    })
}

fn run_step(runner: &mut dyn Runner, step: Step, invocation: &Invocation) -> Result<()> {
    let code = runner.run(invocation)?;
    if code != 0 {
        return Err(BuildError::StepFailed { step, code });
    }
    Ok(())
}
