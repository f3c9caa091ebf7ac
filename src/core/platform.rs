//! Host platform facts.

use std::fmt;

use serde::Serialize;

/// Operating system family, as far as CMake invocation idioms are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsKind {
    Windows,
    Linux,
    Macos,
    /// Any other POSIX-style system
    Other,
}

impl OsKind {
    /// Detect the host OS.
    pub fn host() -> Self {
        Self::from_os_str(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name to an OS kind.
    pub fn from_os_str(os: &str) -> Self {
        match os {
            "windows" => OsKind::Windows,
            "linux" => OsKind::Linux,
            "macos" => OsKind::Macos,
            _ => OsKind::Other,
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, OsKind::Windows)
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OsKind::Windows => "windows",
            OsKind::Linux => "linux",
            OsKind::Macos => "macos",
            OsKind::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// Platform facts read once at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformFacts {
    /// Host OS family
    pub os: OsKind,
    /// Host pointer width in bits
    pub pointer_width: u32,
}

impl PlatformFacts {
    /// Create platform facts explicitly.
    pub fn new(os: OsKind, pointer_width: u32) -> Self {
        PlatformFacts { os, pointer_width }
    }

    /// Detect the facts of the host this process runs on.
    pub fn host() -> Self {
        PlatformFacts {
            os: OsKind::host(),
            pointer_width: usize::BITS,
        }
    }

    /// Whether the host addresses more than 32 bits.
    pub fn is_64bit(&self) -> bool {
        self.pointer_width > 32
    }

    /// File suffix of a loadable extension module on this platform.
    pub fn extension_suffix(&self) -> &'static str {
        if self.os.is_windows() {
            ".pyd"
        } else {
            ".so"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_from_str() {
        assert_eq!(OsKind::from_os_str("windows"), OsKind::Windows);
        assert_eq!(OsKind::from_os_str("linux"), OsKind::Linux);
        assert_eq!(OsKind::from_os_str("macos"), OsKind::Macos);
        assert_eq!(OsKind::from_os_str("freebsd"), OsKind::Other);
    }

    #[test]
    fn test_host_facts() {
        let facts = PlatformFacts::host();
        assert_eq!(facts.pointer_width, usize::BITS);
        assert_eq!(facts.os.is_windows(), cfg!(windows));
    }

    #[test]
    fn test_pointer_width_threshold() {
        assert!(PlatformFacts::new(OsKind::Windows, 64).is_64bit());
        assert!(!PlatformFacts::new(OsKind::Windows, 32).is_64bit());
        assert!(!PlatformFacts::new(OsKind::Linux, 16).is_64bit());
    }

    #[test]
    fn test_extension_suffix() {
        assert_eq!(PlatformFacts::new(OsKind::Windows, 64).extension_suffix(), ".pyd");
        assert_eq!(PlatformFacts::new(OsKind::Macos, 64).extension_suffix(), ".so");
    }
}
