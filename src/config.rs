use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Scope under which the per-platform packages are published.
pub const DEFAULT_NAMESPACE: &str = "@skills-scanner";

/// Base name of the native binary, before any platform suffix.
pub const DEFAULT_BINARY: &str = "skills-scanner";

/// Where and under which names the launcher looks for the native binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub namespace: String,
    pub binary: String,
    /// Directory of the launcher package: package lookup starts here and the
    /// local build output lives under it.
    pub root: PathBuf,
}

impl LauncherConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            binary: DEFAULT_BINARY.to_string(),
            root: root.into(),
        }
    }

    /// Derive the launcher root from the running executable.
    ///
    /// The launcher is installed as `<root>/bin/<name>`, so the root is two
    /// levels above the canonical executable path.
    #[tracing::instrument(skip(runtime))]
    pub fn discover<R: Runtime>(runtime: &R) -> Result<Self> {
        let exe = runtime.current_exe()?;
        let exe = runtime.canonicalize(&exe).unwrap_or(exe);
        let root = launcher_root(&exe)
            .with_context(|| format!("Could not derive launcher root from {}", exe.display()))?;

        debug!("Using launcher root: {}", root.display());
        Ok(Self::new(root))
    }

    /// Use an explicit launcher root.
    ///
    /// The package lookup walks the root's ancestors, so a relative root such
    /// as `.` is made absolute first.
    #[tracing::instrument(skip(runtime))]
    pub fn with_root<R: Runtime>(runtime: &R, root: &Path) -> Result<Self> {
        let root = match runtime.canonicalize(root) {
            Ok(root) => root,
            Err(_) => std::path::absolute(root)
                .with_context(|| format!("Could not make {} absolute", root.display()))?,
        };

        debug!("Using launcher root: {}", root.display());
        Ok(Self::new(root))
    }

    /// Local development build location, `<root>/target/release`.
    pub fn local_build_dir(&self) -> PathBuf {
        self.root.join("target").join("release")
    }
}

fn launcher_root(exe: &Path) -> Option<PathBuf> {
    let bin_dir = exe.parent()?;
    Some(bin_dir.parent().unwrap_or(bin_dir).to_path_buf())
}
