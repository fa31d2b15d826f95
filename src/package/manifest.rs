use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::platform::Target;
use crate::runtime::Runtime;

/// The parts of a platform package's `package.json` the launcher cares about
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PackageManifest {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Operating systems the package was published for, e.g. `["linux"]`
    #[serde(default)]
    pub os: Vec<String>,
    /// CPU architectures the package was published for, e.g. `["x64"]`
    #[serde(default)]
    pub cpu: Vec<String>,
}

impl PackageManifest {
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, package_dir: &Path) -> Result<Self> {
        let path = package_dir.join("package.json");
        let content = runtime.read_to_string(&path)?;
        let manifest: PackageManifest = serde_json::from_str(&content)
            .with_context(|| format!("Invalid package manifest {}", path.display()))?;
        Ok(manifest)
    }

    /// Whether the `os` and `cpu` lists admit `target`.
    ///
    /// Follows npm's rules: an empty list allows everything, `!name` excludes
    /// a value, and any positive entry restricts the list to those values.
    pub fn supports(&self, target: &Target) -> bool {
        list_allows(&self.os, target.platform.as_str()) && list_allows(&self.cpu, target.arch.as_str())
    }
}

fn list_allows(list: &[String], value: &str) -> bool {
    let mut has_positive = false;
    let mut listed = false;
    for entry in list {
        match entry.strip_prefix('!') {
            Some(excluded) if excluded == value => return false,
            Some(_) => {}
            None => {
                has_positive = true;
                listed |= entry == value;
            }
        }
    }
    !has_positive || listed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::platform::{ArchKey, PlatformKey};
    use mockall::predicate::eq;
    use std::path::PathBuf;

    #[test]
    fn test_load_platform_manifest() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .with(eq(PathBuf::from("/pkg/package.json")))
            .returning(|_| {
                Ok(r#"{
                    "name": "@skills-scanner/linux-x64",
                    "version": "0.3.1",
                    "os": ["linux"],
                    "cpu": ["x64"],
                    "files": ["bin"]
                }"#
                .to_string())
            });

        let manifest = PackageManifest::load(&runtime, Path::new("/pkg")).unwrap();
        assert_eq!(manifest.name, "@skills-scanner/linux-x64");
        assert_eq!(manifest.version.as_deref(), Some("0.3.1"));
        assert_eq!(manifest.os, vec!["linux"]);
        assert_eq!(manifest.cpu, vec!["x64"]);
    }

    #[test]
    fn test_load_minimal_manifest() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Ok(r#"{"name": "@skills-scanner/win32-x64"}"#.to_string()));

        let manifest = PackageManifest::load(&runtime, Path::new("/pkg")).unwrap();
        assert_eq!(manifest.version, None);
        assert!(manifest.os.is_empty());
    }

    fn manifest(os: &[&str], cpu: &[&str]) -> PackageManifest {
        PackageManifest {
            name: "@skills-scanner/linux-x64".into(),
            os: os.iter().map(|s| s.to_string()).collect(),
            cpu: cpu.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_supports_matching_and_unrestricted() {
        let target = Target::new(PlatformKey::Linux, ArchKey::X64);
        assert!(manifest(&["linux"], &["x64"]).supports(&target));
        assert!(manifest(&[], &[]).supports(&target));
        assert!(manifest(&["darwin", "linux"], &[]).supports(&target));
    }

    #[test]
    fn test_supports_rejects_other_platform() {
        let target = Target::new(PlatformKey::Linux, ArchKey::X64);
        assert!(!manifest(&["darwin"], &["x64"]).supports(&target));
        assert!(!manifest(&["linux"], &["arm64"]).supports(&target));
    }

    #[test]
    fn test_supports_negated_entries() {
        let target = Target::new(PlatformKey::Win32, ArchKey::Arm64);
        assert!(!manifest(&["!win32"], &[]).supports(&target));
        assert!(manifest(&["!linux"], &[]).supports(&target));
        assert!(!manifest(&[], &["!arm64"]).supports(&target));
    }

    #[test]
    fn test_load_invalid_manifest() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("not json".to_string()));

        let err = PackageManifest::load(&runtime, Path::new("/pkg")).unwrap_err();
        assert!(err.to_string().contains("Invalid package manifest"));
    }
}
