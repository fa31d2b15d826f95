//! Post-install check that the platform package arrived.
//!
//! Purely advisory: every outcome is reported, none of them fails the install.

use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::LauncherConfig;
use crate::package::{PackageManifest, find_package_dir};
use crate::platform::{HostPlatform, PlatformDetector, Target};
use crate::runtime::Runtime;

/// Outcome of a post-install check
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// No package is published for this host.
    Unsupported { host: HostPlatform },
    /// The platform package is installed.
    Installed {
        target: Target,
        package: String,
        dir: PathBuf,
        version: Option<String>,
    },
    /// A package sits under the expected name but its manifest is for
    /// another package or excludes this platform.
    Incompatible {
        target: Target,
        package: String,
        dir: PathBuf,
        manifest: PackageManifest,
    },
    /// The platform package is missing, typically because optional
    /// dependencies were skipped.
    Missing { target: Target, package: String },
}

impl Verification {
    pub fn is_installed(&self) -> bool {
        matches!(self, Verification::Installed { .. })
    }

    /// Write the report: success to `out`, warnings to `err`.
    pub fn emit<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        match self {
            Verification::Unsupported { host } => {
                writeln!(err)?;
                writeln!(err, "⚠️  skills-scanner: Unsupported platform {}", host)?;
                writeln!(err, "   You may need to build from source.")?;
                writeln!(err)
            }
            Verification::Installed {
                target, version, ..
            } => match version {
                Some(version) => writeln!(
                    out,
                    "✓ skills-scanner: Binary installed for {} (v{})",
                    target, version
                ),
                None => writeln!(out, "✓ skills-scanner: Binary installed for {}", target),
            },
            Verification::Incompatible {
                target,
                package,
                dir,
                manifest,
            } => {
                writeln!(err)?;
                writeln!(
                    err,
                    "⚠️  skills-scanner: {} at {} does not match {}.",
                    package,
                    dir.display(),
                    target
                )?;
                writeln!(
                    err,
                    "   Found {} (os: [{}], cpu: [{}]). Reinstall to fetch the right binary.",
                    manifest.name,
                    manifest.os.join(", "),
                    manifest.cpu.join(", ")
                )?;
                writeln!(err)
            }
            Verification::Missing { package, .. } => {
                writeln!(err)?;
                writeln!(
                    err,
                    "⚠️  skills-scanner: Optional dependency {} not installed.",
                    package
                )?;
                writeln!(
                    err,
                    "   This is expected if npm install was run with --ignore-optional or --omit=optional."
                )?;
                writeln!(err)
            }
        }
    }
}

/// Check whether the optional package for the detected host is installed.
#[tracing::instrument(skip(runtime, detector, config))]
pub fn verify<R: Runtime, D: PlatformDetector>(
    runtime: &R,
    detector: &D,
    config: &LauncherConfig,
) -> Verification {
    let host = detector.detect();

    let target = match Target::from_host(&host) {
        Ok(target) => target,
        Err(err) => {
            debug!("{}", err);
            return Verification::Unsupported { host };
        }
    };

    let package = target.package_name(&config.namespace);
    let Some(dir) = find_package_dir(runtime, &config.root, &package) else {
        return Verification::Missing { target, package };
    };

    let manifest = match PackageManifest::load(runtime, &dir) {
        Ok(manifest) => manifest,
        Err(err) => {
            debug!("Could not read manifest of {}: {:#}", package, err);
            return Verification::Installed {
                target,
                package,
                dir,
                version: None,
            };
        }
    };

    if manifest.name != package || !manifest.supports(&target) {
        return Verification::Incompatible {
            target,
            package,
            dir,
            manifest,
        };
    }

    Verification::Installed {
        target,
        package,
        dir,
        version: manifest.version,
    }
}
