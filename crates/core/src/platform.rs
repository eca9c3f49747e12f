// Platform tag derivation
// Pure mapping from the host OS identifier; unknown values pass through.

use std::fmt;

/// Host platform tag, as used for the `bin/<tag>/` bundle layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformTag {
    Linux,
    Macos,
    Windows,
    /// Unrecognized OS identifier, carried verbatim.
    Other(String),
}

impl PlatformTag {
    /// Map a host OS identifier (the values of `std::env::consts::OS`)
    /// to a tag. Pure; anything unrecognized becomes `Other`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => PlatformTag::Linux,
            "macos" => PlatformTag::Macos,
            "windows" => PlatformTag::Windows,
            other => PlatformTag::Other(other.to_string()),
        }
    }

    /// Tag of the host this launcher was compiled for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Executable file name for this tag. The `.exe` suffix is appended
    /// on the windows tag only.
    pub fn exe_name(&self, base: &str) -> String {
        match self {
            PlatformTag::Windows => format!("{base}.exe"),
            _ => base.to_string(),
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformTag::Linux => f.write_str("linux"),
            PlatformTag::Macos => f.write_str("macos"),
            PlatformTag::Windows => f.write_str("windows"),
            PlatformTag::Other(os) => f.write_str(os),
        }
    }
}
