use crate::error::{Error, Result};

use super::HostPlatform;

/// Operating systems with a published binary package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKey {
    Win32,
    Darwin,
    Linux,
}

impl PlatformKey {
    /// Map a host OS identifier. Accepts both Node (`win32`, `darwin`) and
    /// Rust (`windows`, `macos`) spellings; `None` means unsupported.
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "win32" | "windows" => Some(Self::Win32),
            "darwin" | "macos" => Some(Self::Darwin),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Win32 => "win32",
            Self::Darwin => "darwin",
            Self::Linux => "linux",
        }
    }
}

/// CPU architectures with a published binary package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchKey {
    X64,
    Arm64,
}

impl ArchKey {
    /// Map a host CPU identifier; `None` means unsupported.
    pub fn from_arch(arch: &str) -> Option<Self> {
        match arch {
            "x64" | "x86_64" | "amd64" => Some(Self::X64),
            "arm64" | "aarch64" => Some(Self::Arm64),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::Arm64 => "arm64",
        }
    }
}

/// A supported platform/architecture pair.
///
/// Determines which optional package carries the binary and what the binary
/// file is called on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub platform: PlatformKey,
    pub arch: ArchKey,
}

impl Target {
    pub fn new(platform: PlatformKey, arch: ArchKey) -> Self {
        Self { platform, arch }
    }

    /// Map the detected host, failing when either half is unsupported.
    pub fn from_host(host: &HostPlatform) -> Result<Self> {
        match (
            PlatformKey::from_os(&host.os),
            ArchKey::from_arch(&host.arch),
        ) {
            (Some(platform), Some(arch)) => Ok(Self::new(platform, arch)),
            _ => Err(Error::UnsupportedPlatform {
                os: host.os.clone(),
                arch: host.arch.clone(),
            }),
        }
    }

    /// Package name such as `@skills-scanner/linux-x64`.
    pub fn package_name(&self, namespace: &str) -> String {
        format!(
            "{}/{}-{}",
            namespace,
            self.platform.as_str(),
            self.arch.as_str()
        )
    }

    /// File name of the binary; only Windows gets an `.exe` suffix.
    pub fn binary_name(&self, base: &str) -> String {
        match self.platform {
            PlatformKey::Win32 => format!("{base}.exe"),
            PlatformKey::Darwin | PlatformKey::Linux => base.to_string(),
        }
    }

    /// Every supported pair.
    pub fn all() -> impl Iterator<Item = Target> {
        [PlatformKey::Win32, PlatformKey::Darwin, PlatformKey::Linux]
            .into_iter()
            .flat_map(|platform| {
                [ArchKey::X64, ArchKey::Arm64]
                    .into_iter()
                    .map(move |arch| Target::new(platform, arch))
            })
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.platform.as_str(), self.arch.as_str())
    }
}
