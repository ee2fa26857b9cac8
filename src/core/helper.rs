use crate::adapters::NativePathResolver;
use crate::core::{filename, path_containment, version};
use crate::domain::ports::PathResolver;

/// Bundles the three checks with the path rules used for containment.
///
/// The async methods finish without suspending; they exist so callers in an
/// async context can treat every helper alike.
pub struct Helper<R: PathResolver> {
    resolver: R,
}

impl<R: PathResolver> Helper<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub async fn valid_file_name(&self, name: &str) -> bool {
        filename::valid_file_name(name)
    }

    pub async fn version_compare(&self, v1: &str, v2: &str) -> i32 {
        version::version_compare(v1, v2)
    }

    pub fn is_subdirectory_or_equal(&self, parent: &str, child: &str) -> bool {
        path_containment::is_subdirectory_or_equal(&self.resolver, parent, child)
    }
}

impl Helper<NativePathResolver> {
    /// Host path rules with the current working directory.
    pub fn native() -> Self {
        Self::new(NativePathResolver::new())
    }
}

impl Default for Helper<NativePathResolver> {
    fn default() -> Self {
        Self::native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{PosixPathResolver, WindowsPathResolver};

    #[tokio::test]
    async fn test_async_wrappers() {
        let helper = Helper::new(PosixPathResolver::new("/home/joplin"));
        assert!(helper.valid_file_name("some ^test file.txt").await);
        assert!(!helper.valid_file_name("lpt5.txt").await);
        assert_eq!(helper.version_compare("2.9.13", "2.9.12").await, 1);
        assert_eq!(helper.version_compare("2", "").await, -2);
    }

    #[test]
    fn test_async_wrappers_complete_without_a_runtime() {
        let helper = Helper::new(WindowsPathResolver::default());
        assert!(!tokio_test::block_on(helper.valid_file_name("AUX")));
        assert_eq!(
            tokio_test::block_on(helper.version_compare("3.11.8", "3.11.8-a")),
            0
        );
    }

    #[test]
    fn test_containment_uses_injected_rules() {
        let posix = Helper::new(PosixPathResolver::new("/home/joplin"));
        assert!(posix.is_subdirectory_or_equal("/tmp", "/tmp/test"));
        assert!(!posix.is_subdirectory_or_equal("/tmp/te", "/tmp/test"));

        let windows = Helper::new(WindowsPathResolver::new("C:\\Users\\Default"));
        assert!(windows.is_subdirectory_or_equal(
            "C:\\Users\\User\\",
            "C:\\Users\\User\\.config\\joplin-desktop"
        ));
        assert!(!windows.is_subdirectory_or_equal("D:\\Users\\User\\", "C:\\Users\\User\\"));
    }

    #[test]
    fn test_boxed_resolver() {
        let helper = Helper::new(crate::adapters::resolver_for(
            Some(crate::domain::model::PathPlatform::Posix),
            Some("/srv"),
        ));
        assert!(helper.is_subdirectory_or_equal("/srv", "data"));
    }
}
