// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Command lines for the solution generator and the native build tools.

use crate::error::Result;
use crate::exec::Invocation;
use crate::host::{Host, Toolchain};
use crate::params::BuildParams;
use crate::platform::Platform;

const XCODE_PROJECT: &str = "NAP.xcodeproj";

/// Generator call, run from the project root.
pub fn solution_command(host: &Host, params: &BuildParams) -> Invocation {
    let mut inv = Invocation::new(host.solution_script(), &host.root)
        .arg(format!("--build-path={}", host.build_dir.display()));

    if host.platform == Platform::Linux {
        inv = inv.args(["-t", params.build_type.as_lower()]);
    }

    if params.enable_python {
        inv = inv.arg("-p");
    }

    inv
}

/// Native build call for the host platform.
pub fn build_command(host: &Host, params: &BuildParams, toolchain: &Toolchain) -> Result<Invocation> {
    let config = params.build_type.capitalized();

    let inv = match host.platform {
        Platform::Linux => Invocation::new("make", &host.build_dir)
            .arg(params.target.as_str())
            .arg(format!("-j{}", toolchain.jobs)),
        Platform::MacOs => {
            let inv = Invocation::new("xcodebuild", &host.build_dir)
                .args(["-project", XCODE_PROJECT, "-configuration", config]);
            if params.builds_all_targets() {
                inv.arg("-alltargets")
            } else {
                inv.args(["-target", params.target.as_str()])
            }
        }
        Platform::Windows => {
            let cmake = toolchain.cmake(&host.root)?;
            let inv = Invocation::new(cmake, &host.root)
                .arg("--build")
                .arg(host.build_dir.as_os_str())
                .args(["--config", config]);
            if params.builds_all_targets() {
                inv
            } else {
                inv.args(["--target", params.target.as_str()])
            }
        }
    };

    Ok(inv)
}
