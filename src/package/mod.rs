//! Installed package lookup
//!
//! This module locates platform packages installed under `node_modules`
//! directories and reads their manifests.

mod discovery;
mod manifest;

pub use discovery::find_package_dir;
pub use manifest::PackageManifest;
