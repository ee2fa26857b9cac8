// Adapters layer: concrete path resolvers behind the `PathResolver` port.

pub mod native;
pub mod posix;
pub mod windows;

pub use native::NativePathResolver;
pub use posix::PosixPathResolver;
pub use windows::WindowsPathResolver;

use crate::domain::model::PathPlatform;
use crate::domain::ports::PathResolver;

/// Builds a resolver for `platform`, or for the host when `platform` is `None`.
/// Without `cwd`, POSIX and Windows rules start from their root and native
/// rules use the process working directory.
pub fn resolver_for(platform: Option<PathPlatform>, cwd: Option<&str>) -> Box<dyn PathResolver> {
    match (platform, cwd) {
        (Some(PathPlatform::Posix), cwd) => Box::new(PosixPathResolver::new(cwd.unwrap_or("/"))),
        (Some(PathPlatform::Windows), cwd) => {
            Box::new(WindowsPathResolver::new(cwd.unwrap_or("C:\\")))
        }
        (None, Some(cwd)) => Box::new(NativePathResolver::with_cwd(cwd)),
        (None, None) => Box::new(NativePathResolver::new()),
    }
}
