// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Host platform detection.
//!
//! The platform decides the build directory name, the solution script and
//! which native build tool is driven.

use std::fmt;

const LINUX_BUILD_DIR: &str = "build";
const MACOS_BUILD_DIR: &str = "Xcode";
const MSVC_BUILD_DIR: &str = "msvc64";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Platform of the running host.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps an OS identifier to a platform. Unknown systems are treated as
    /// Windows.
    pub fn from_os_name(os: &str) -> Self {
        if os.starts_with("linux") {
            Platform::Linux
        } else if os == "macos" || os == "darwin" {
            Platform::MacOs
        } else {
            Platform::Windows
        }
    }

    pub fn build_dir_name(self) -> &'static str {
        match self {
            Platform::Linux => LINUX_BUILD_DIR,
            Platform::MacOs => MACOS_BUILD_DIR,
            Platform::Windows => MSVC_BUILD_DIR,
        }
    }

    /// Solution generator script expected in the project root.
    pub fn solution_script(self) -> &'static str {
        match self {
            Platform::Linux | Platform::MacOs => "generate_solution.sh",
            Platform::Windows => "generate_solution.bat",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_dir_names() {
        assert_eq!(Platform::Linux.build_dir_name(), "build");
        assert_eq!(Platform::MacOs.build_dir_name(), "Xcode");
        assert_eq!(Platform::Windows.build_dir_name(), "msvc64");
    }

    #[test]
    fn os_names_map_to_platforms() {
        assert_eq!(Platform::from_os_name("linux"), Platform::Linux);
        assert_eq!(Platform::from_os_name("linux2"), Platform::Linux);
        assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("darwin"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("windows"), Platform::Windows);
    }

    #[test]
    fn unknown_os_falls_back_to_windows() {
        let platform = Platform::from_os_name("freebsd");
        assert_eq!(platform, Platform::Windows);
        assert_eq!(platform.build_dir_name(), "msvc64");
        assert_eq!(platform.solution_script(), "generate_solution.bat");
    }

    #[test]
    fn current_matches_target_os() {
        let expected = if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Windows
        };
        assert_eq!(Platform::current(), expected);
    }
}
