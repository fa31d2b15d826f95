use log::debug;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

const NODE_MODULES: &str = "node_modules";
const MANIFEST: &str = "package.json";

/// Find the installation directory of a Node package by name.
///
/// Walks from `start` up to the filesystem root, checking
/// `<dir>/node_modules/<name>/package.json` at each level, and returns the
/// first directory holding a manifest. Ancestors that are themselves a
/// `node_modules` directory are skipped. Scoped names like `@scope/pkg` are
/// split into path components.
#[tracing::instrument(skip(runtime))]
pub fn find_package_dir<R: Runtime>(runtime: &R, start: &Path, name: &str) -> Option<PathBuf> {
    for dir in start.ancestors() {
        if dir.file_name().is_some_and(|n| n == NODE_MODULES) {
            continue;
        }

        let mut candidate = dir.join(NODE_MODULES);
        candidate.extend(name.split('/').filter(|part| !part.is_empty()));

        if runtime.is_file(&candidate.join(MANIFEST)) {
            debug!("Found package {} at {}", name, candidate.display());
            return Some(candidate);
        }
    }

    debug!("Package {} not found above {}", name, start.display());
    None
}
