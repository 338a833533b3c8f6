// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Host layout and toolchain discovery.
//!
//! The host layout is resolved once at startup and passed by reference to
//! the build steps. cmake is only looked up when the build command is made.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::platform::Platform;

/// Environment variable overriding the cmake executable on Windows.
pub const CMAKE_ENV: &str = "NAP_CMAKE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub platform: Platform,
    pub root: PathBuf,
    pub build_dir: PathBuf,
}

impl Host {
    pub fn new(platform: Platform, root: PathBuf) -> Self {
        let build_dir = root.join(platform.build_dir_name());
        Self {
            platform,
            root,
            build_dir,
        }
    }

    /// Resolves the project root, either from an explicit path or by
    /// searching upwards for the solution script.
    pub fn discover(platform: Platform, explicit_root: Option<&Path>) -> Result<Self> {
        let root = match explicit_root {
            Some(root) => {
                let root = env::current_dir()
                    .map(|cwd| cwd.join(root))
                    .unwrap_or_else(|_| root.to_path_buf());
                if !root.is_dir() {
                    return Err(BuildError::InvalidRoot(root));
                }
                root
            }
            None => search_root(platform)?,
        };

        tracing::debug!(root = %root.display(), %platform, "resolved project root");
        Ok(Self::new(platform, root))
    }

    pub fn solution_script(&self) -> PathBuf {
        self.root.join(self.platform.solution_script())
    }
}

fn search_root(platform: Platform) -> Result<PathBuf> {
    let script = platform.solution_script();
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut starts = vec![cwd.clone()];
    if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        starts.push(exe_dir);
    }

    starts
        .iter()
        .find_map(|start| find_root_from(start, script))
        .ok_or(BuildError::RootNotFound {
            script,
            searched: cwd,
        })
}

/// First ancestor of `start` (inclusive) that contains `script`.
pub fn find_root_from(start: &Path, script: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(script).is_file())
        .map(Path::to_path_buf)
}

/// External tools the build step depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub jobs: usize,
    /// Explicit cmake executable; looked up under the root or on PATH when unset.
    pub cmake: Option<PathBuf>,
}

impl Toolchain {
    pub fn detect() -> Self {
        let jobs = cpu_count();
        let cmake = env::var_os(CMAKE_ENV).map(PathBuf::from);

        tracing::debug!(jobs, cmake = ?cmake, "detected toolchain");
        Self { jobs, cmake }
    }

    /// Resolves cmake when the build step needs it, after the solution has
    /// been generated.
    pub fn cmake(&self, root: &Path) -> Result<PathBuf> {
        find_cmake(root, self.cmake.clone())
    }
}

/// Logical CPU count, used for `make -j`.
pub fn cpu_count() -> usize {
    match sys_info::cpu_num() {
        Ok(n) if n > 0 => n as usize,
        _ => std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1),
    }
}

fn bundled_cmake(root: &Path) -> PathBuf {
    root.join("thirdparty")
        .join("cmake")
        .join("msvc")
        .join("x86_64")
        .join("bin")
        .join("cmake.exe")
}

/// Override first, then the cmake shipped in thirdparty, then PATH.
pub fn find_cmake(root: &Path, override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    let bundled = bundled_cmake(root);
    if bundled.is_file() {
        return Ok(bundled);
    }

    which::which("cmake").map_err(|_| BuildError::CmakeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn build_dir_follows_platform() {
        let root = PathBuf::from("/opt/nap");
        assert_eq!(Host::new(Platform::Linux, root.clone()).build_dir, root.join("build"));
        assert_eq!(Host::new(Platform::MacOs, root.clone()).build_dir, root.join("Xcode"));
        assert_eq!(Host::new(Platform::Windows, root.clone()).build_dir, root.join("msvc64"));
    }

    #[test]
    fn root_is_found_from_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("generate_solution.sh"), "").unwrap();
        let nested = tmp.path().join("tools").join("buildsystem");
        fs::create_dir_all(&nested).unwrap();

        let found = find_root_from(&nested, "generate_solution.sh").unwrap();
        assert_eq!(found, tmp.path());
    }

    #[test]
    fn root_search_misses_without_script() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(find_root_from(tmp.path(), "nap-build-missing-script.sh").is_none());
    }

    #[test]
    fn explicit_root_must_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let err = Host::discover(Platform::Linux, Some(&missing)).unwrap_err();
        assert!(matches!(err, BuildError::InvalidRoot(_)));
    }

    #[test]
    fn explicit_root_is_used() {
        let tmp = tempfile::tempdir().unwrap();
        let host = Host::discover(Platform::MacOs, Some(tmp.path())).unwrap();
        assert_eq!(host.root, tmp.path());
        assert_eq!(host.build_dir, tmp.path().join("Xcode"));
        assert_eq!(host.solution_script(), tmp.path().join("generate_solution.sh"));
    }

    #[test]
    fn cmake_override_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let custom = PathBuf::from("C:/tools/cmake.exe");
        assert_eq!(find_cmake(tmp.path(), Some(custom.clone())).unwrap(), custom);
    }

    #[test]
    fn bundled_cmake_is_preferred_over_path() {
        let tmp = tempfile::tempdir().unwrap();
        let bundled = bundled_cmake(tmp.path());
        fs::create_dir_all(bundled.parent().unwrap()).unwrap();
        fs::write(&bundled, "").unwrap();
        assert_eq!(find_cmake(tmp.path(), None).unwrap(), bundled);
    }

    #[test]
    fn toolchain_has_at_least_one_job() {
        assert!(Toolchain::detect().jobs >= 1);
    }

    #[test]
    fn toolchain_cmake_prefers_explicit_path() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = Toolchain {
            jobs: 1,
            cmake: Some(PathBuf::from("C:/tools/cmake.exe")),
        };
        assert_eq!(toolchain.cmake(tmp.path()).unwrap(), PathBuf::from("C:/tools/cmake.exe"));
    }
}
