// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Usage:
//!   nap-build                      Generate the solution and build all targets
//!   nap-build <project>            Build a single target
//!   nap-build -t debug -c          Clean debug build
//!   nap-build -p                   Generate with Python integration

mod build;
mod commands;
mod error;
mod exec;
mod host;
mod params;
mod platform;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::error::BuildError;
use crate::exec::SystemRunner;
use crate::host::{Host, Toolchain};
use crate::params::{BuildParams, BuildType, ALL_TARGETS};
use crate::platform::Platform;

#[derive(Parser)]
#[command(name = "nap-build")]
#[command(about = "Generate the NAP solution and build it with the native toolchain")]
struct Cli {
    /// The project name (default='all')
    #[arg(value_name = "PROJECT_NAME", default_value = ALL_TARGETS)]
    project: String,

    /// Build configuration
    #[arg(short = 't', long, value_enum, ignore_case = true, default_value_t = BuildType::Release)]
    build_type: BuildType,

    /// Clean before build
    #[arg(short, long)]
    clean: bool,

    /// Enable Python integration using pybind (deprecated)
    #[arg(short = 'p', long)]
    enable_python: bool,

    /// Project root (searched upwards for the solution script when omitted)
    #[arg(long, env = "NAP_ROOT", value_name = "DIR")]
    root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn params(&self) -> BuildParams {
        BuildParams {
            target: self.project.clone(),
            build_type: self.build_type,
            clean: self.clean,
            enable_python: self.enable_python,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(params: &BuildParams, root: Option<&Path>) -> Result<()> {
    let platform = Platform::current();
    let host = Host::discover(platform, root).context("Failed to resolve project root")?;
    let toolchain = Toolchain::detect();

    build::run(&host, params, &toolchain, &mut SystemRunner)?;
    Ok(())
}

/// Exit code for a failed run: the child's code for step failures, 1 for
/// anything that never reached a child.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BuildError>()
        .map(BuildError::exit_code)
        .unwrap_or(1)
}

/// Startup line, with flags spelled `True`/`False` like the Python build script.
fn summary(params: &BuildParams) -> String {
    let clean = if params.clean { "True" } else { "False" };
    format!(
        "Project to build: {}, clean: {}, type: {}",
        params.target, clean, params.build_type
    )
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let params = cli.params();
    println!("{}", summary(&params));

    if let Err(err) = run(&params, cli.root.as_deref()) {
        eprintln!("error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}
