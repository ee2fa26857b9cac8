use crate::domain::model::{PathPlatform, ResolvedPath};

/// Turns a path string into an absolute, normalized path under one
/// platform's rules. Implementations must be total: any input resolves.
pub trait PathResolver: Send + Sync {
    fn platform(&self) -> PathPlatform;
    fn resolve(&self, path: &str) -> ResolvedPath;
}

impl<R: PathResolver + ?Sized> PathResolver for &R {
    fn platform(&self) -> PathPlatform {
        (**self).platform()
    }

    fn resolve(&self, path: &str) -> ResolvedPath {
        (**self).resolve(path)
    }
}

impl<R: PathResolver + ?Sized> PathResolver for Box<R> {
    fn platform(&self) -> PathPlatform {
        (**self).platform()
    }

    fn resolve(&self, path: &str) -> ResolvedPath {
        (**self).resolve(path)
    }
}
