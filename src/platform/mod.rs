//! Platform detection and mapping module
//!
//! This module detects the host OS and CPU architecture and maps them onto
//! the fixed set of targets that ship a prebuilt binary.

mod detection;
mod target;

pub use detection::{DefaultPlatformDetector, FixedPlatformDetector, HostPlatform, PlatformDetector};
pub use target::{ArchKey, PlatformKey, Target};
