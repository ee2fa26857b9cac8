use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a candidate file name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FilenameViolation {
    #[error("name is empty")]
    Empty,

    #[error("contains illegal character '{0}'")]
    IllegalCharacter(char),

    #[error("'{0}' is a reserved device name")]
    ReservedName(String),
}

/// Which platform's path rules a resolver applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPlatform {
    Posix,
    Windows,
}

impl PathPlatform {
    /// The platform the crate was compiled for.
    pub fn host() -> Self {
        if cfg!(windows) {
            PathPlatform::Windows
        } else {
            PathPlatform::Posix
        }
    }

    pub fn separator(self) -> char {
        match self {
            PathPlatform::Posix => '/',
            PathPlatform::Windows => '\\',
        }
    }

    pub fn is_case_sensitive(self) -> bool {
        matches!(self, PathPlatform::Posix)
    }
}

impl fmt::Display for PathPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPlatform::Posix => write!(f, "posix"),
            PathPlatform::Windows => write!(f, "windows"),
        }
    }
}

/// An absolute, normalized path together with the rules it was resolved under.
///
/// The path never ends with a separator unless it is a bare root
/// (`/`, `C:\`, `\\server\share\`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: String,
    platform: PathPlatform,
}

impl ResolvedPath {
    pub fn new(path: String, platform: PathPlatform) -> Self {
        Self { path, platform }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn platform(&self) -> PathPlatform {
        self.platform
    }

    /// Key used for comparisons: folded to lowercase where the platform
    /// ignores case.
    pub fn comparison_key(&self) -> String {
        if self.platform.is_case_sensitive() {
            self.path.clone()
        } else {
            self.path.to_ascii_lowercase()
        }
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
