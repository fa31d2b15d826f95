//! Locating the native binary for the current host.
//!
//! Resolution maps the host onto a [`Target`] and then tries an ordered list
//! of [`Strategy`] values. The first strategy whose candidate exists on disk
//! wins.

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;
use crate::error::{Error, Result};
use crate::package::find_package_dir;
use crate::platform::{HostPlatform, PlatformDetector, Target};
use crate::runtime::Runtime;

/// One place the binary may live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `<packageDir>/bin/<binary>` of the installed platform package.
    OptionalPackage,
    /// `<root>/target/release/<binary>` from a local cargo build.
    ///
    /// This is a build of the scanner itself. Building this launcher with
    /// `cargo build --release` writes a file with the same name into the same
    /// slot; a launcher found there is only skipped when it is the running
    /// executable (same canonical path), a separate copy is still executed.
    LocalBuild,
}

impl Strategy {
    /// Packaged binaries take precedence over development builds.
    pub const DEFAULT_ORDER: [Strategy; 2] = [Strategy::OptionalPackage, Strategy::LocalBuild];

    /// Candidate path for this strategy, without checking that it exists.
    /// `None` when the strategy cannot produce a path at all.
    pub fn candidate<R: Runtime>(
        self,
        runtime: &R,
        config: &LauncherConfig,
        target: &Target,
    ) -> Option<PathBuf> {
        let binary = target.binary_name(&config.binary);
        match self {
            Strategy::OptionalPackage => {
                let package = target.package_name(&config.namespace);
                find_package_dir(runtime, &config.root, &package)
                    .map(|dir| dir.join("bin").join(binary))
            }
            Strategy::LocalBuild => Some(config.local_build_dir().join(binary)),
        }
    }
}

/// Resolve the binary for the detected host using the default strategy order.
pub fn resolve<R: Runtime, D: PlatformDetector>(
    runtime: &R,
    detector: &D,
    config: &LauncherConfig,
) -> Result<PathBuf> {
    resolve_with(runtime, &detector.detect(), config, &Strategy::DEFAULT_ORDER)
}

/// Resolve the binary for `host`, trying `strategies` in order.
#[tracing::instrument(skip(runtime, config))]
pub fn resolve_with<R: Runtime>(
    runtime: &R,
    host: &HostPlatform,
    config: &LauncherConfig,
    strategies: &[Strategy],
) -> Result<PathBuf> {
    let target = Target::from_host(host)?;

    for strategy in strategies {
        let Some(path) = strategy.candidate(runtime, config, &target) else {
            debug!("{:?}: no candidate for {}", strategy, target);
            continue;
        };

        if !runtime.exists(&path) {
            debug!("{:?}: {} does not exist", strategy, path.display());
            continue;
        }

        if is_current_exe(runtime, &path) {
            debug!("{:?}: {} is the launcher itself", strategy, path.display());
            continue;
        }

        info!("Resolved binary via {:?}: {}", strategy, path.display());
        return Ok(path);
    }

    Err(Error::BinaryNotFound {
        os: target.platform.as_str().to_string(),
        arch: target.arch.as_str().to_string(),
        package: target.package_name(&config.namespace),
    })
}

/// Whether `path` refers to the running executable.
fn is_current_exe<R: Runtime>(runtime: &R, path: &Path) -> bool {
    let Ok(exe) = runtime.current_exe() else {
        return false;
    };
    let exe = runtime.canonicalize(&exe).unwrap_or(exe);
    let path = runtime
        .canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf());
    exe == path
}
