//! Error types for resolving and launching the scanner binary.

use std::path::PathBuf;

/// Errors that can occur while resolving or launching the native binary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The host OS or CPU architecture has no prebuilt binary.
    #[error("Unsupported platform: {os}-{arch}")]
    UnsupportedPlatform {
        /// Host OS identifier as detected.
        os: String,
        /// Host CPU architecture identifier as detected.
        arch: String,
    },

    /// The platform is supported, but no binary was found by any strategy.
    #[error("Could not find binary for {os}-{arch}. Please ensure {package} is installed.")]
    BinaryNotFound {
        /// Platform key of the target, e.g. `linux`.
        os: String,
        /// Architecture key of the target, e.g. `x64`.
        arch: String,
        /// Optional package that should have provided the binary.
        package: String,
    },

    /// The resolved binary could not be started.
    #[error("Failed to start {}", binary.display())]
    ChildLaunch {
        /// Path that was passed to the OS.
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for launcher operations.
pub type Result<T> = std::result::Result<T, Error>;
