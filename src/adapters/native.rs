use crate::adapters::{PosixPathResolver, WindowsPathResolver};
use crate::domain::model::{PathPlatform, ResolvedPath};
use crate::domain::ports::PathResolver;

/// Host rules and the process working directory, captured at construction.
#[derive(Debug, Clone)]
pub enum NativePathResolver {
    Posix(PosixPathResolver),
    Windows(WindowsPathResolver),
}

impl NativePathResolver {
    pub fn new() -> Self {
        let cwd = match std::env::current_dir() {
            Ok(dir) => dir.to_string_lossy().into_owned(),
            Err(e) => {
                tracing::warn!(
                    "Could not read current directory, relative paths resolve from the root: {}",
                    e
                );
                String::new()
            }
        };
        Self::with_cwd(&cwd)
    }

    /// Host rules over an explicit working directory.
    pub fn with_cwd(cwd: &str) -> Self {
        match PathPlatform::host() {
            PathPlatform::Windows => NativePathResolver::Windows(WindowsPathResolver::new(cwd)),
            PathPlatform::Posix => NativePathResolver::Posix(PosixPathResolver::new(cwd)),
        }
    }
}

impl Default for NativePathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver for NativePathResolver {
    fn platform(&self) -> PathPlatform {
        match self {
            NativePathResolver::Posix(r) => r.platform(),
            NativePathResolver::Windows(r) => r.platform(),
        }
    }

    fn resolve(&self, path: &str) -> ResolvedPath {
        match self {
            NativePathResolver::Posix(r) => r.resolve(path),
            NativePathResolver::Windows(r) => r.resolve(path),
        }
    }
}
