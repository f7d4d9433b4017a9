//! Host platform detection and the table of supported platforms.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Platforms with a known AVR toolchain layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS with avr-gcc installed through Homebrew
    Darwin,
    /// Linux with the distribution `gcc-avr` package
    Linux,
}

impl Platform {
    /// The identifier as reported by `uname -s`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "Darwin",
            Platform::Linux => "Linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Darwin" => Ok(Platform::Darwin),
            "Linux" => Ok(Platform::Linux),
            other => Err(Error::UnsupportedPlatform { platform: other.to_string() }),
        }
    }
}

/// Maps a Rust target OS name to its `uname -s` style identifier.
/// Unknown names are passed through unchanged.
pub fn system_name(os: &str) -> String {
    match os {
        "macos" => "Darwin".to_string(),
        "linux" => "Linux".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "dragonfly" => "DragonFly".to_string(),
        "solaris" | "illumos" => "SunOS".to_string(),
        other => other.to_string(),
    }
}

/// Returns the identifier of the running operating system.
pub fn host_system() -> String {
    system_name(std::env::consts::OS)
}
