//! Host platform detection
//!
//! Reports the canonical operating system name (`Linux`, `Windows`, `Darwin`, ...)
//! and classifies it into the closed set of platforms the bootstrap knows about.

use std::fmt;

/// Names recognised by the bootstrap, in the order they are checked
pub const RECOGNISED_NAMES: [&str; 3] = ["Linux", "Windows", "Darwin"];

/// Operating system as seen by the bootstrap sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatingSystem {
    Linux,
    Windows,
    MacOS,
    /// Any name outside the recognised set, kept verbatim
    Unknown(String),
}

impl OperatingSystem {
    /// Classify a platform name. Matching is exact and case-sensitive.
    pub fn classify(name: &str) -> Self {
        match name {
            "Linux" => Self::Linux,
            "Windows" => Self::Windows,
            "Darwin" => Self::MacOS,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Canonical platform name this variant was classified from
    pub fn name(&self) -> &str {
        match self {
            Self::Linux => RECOGNISED_NAMES[0],
            Self::Windows => RECOGNISED_NAMES[1],
            Self::MacOS => RECOGNISED_NAMES[2],
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical name of the platform this binary is running on
pub fn detect_platform_name() -> String {
    canonical_name(std::env::consts::OS)
}

/// Map a Rust target OS identifier to the name the platform reports about itself
fn canonical_name(target_os: &str) -> String {
    match target_os {
        "linux" => "Linux".to_string(),
        "windows" => "Windows".to_string(),
        "macos" => "Darwin".to_string(),
        "ios" => "iOS".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "dragonfly" => "DragonFly".to_string(),
        "solaris" | "illumos" => "SunOS".to_string(),
        "android" => "Android".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
