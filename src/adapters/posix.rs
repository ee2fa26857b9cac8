use crate::domain::model::{PathPlatform, ResolvedPath};
use crate::domain::ports::PathResolver;

/// POSIX rules: `/` separator, case-sensitive, absolute iff rooted at `/`.
#[derive(Debug, Clone, Default)]
pub struct PosixPathResolver {
    cwd: Vec<String>,
}

impl PosixPathResolver {
    /// `cwd` is the directory relative paths are joined onto. A relative
    /// `cwd` is taken as relative to `/`.
    pub fn new(cwd: impl AsRef<str>) -> Self {
        let mut components = Vec::new();
        push_components(&mut components, cwd.as_ref());
        Self { cwd: components }
    }

    pub fn cwd(&self) -> String {
        render(&self.cwd)
    }

    pub fn is_absolute(path: &str) -> bool {
        path.starts_with('/')
    }
}

impl PathResolver for PosixPathResolver {
    fn platform(&self) -> PathPlatform {
        PathPlatform::Posix
    }

    fn resolve(&self, path: &str) -> ResolvedPath {
        let mut components = if Self::is_absolute(path) {
            Vec::new()
        } else {
            self.cwd.clone()
        };
        push_components(&mut components, path);
        ResolvedPath::new(render(&components), PathPlatform::Posix)
    }
}

fn push_components(stack: &mut Vec<String>, path: &str) {
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            name => stack.push(name.to_string()),
        }
    }
}

fn render(components: &[String]) -> String {
    format!("/{}", components.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_normalizes() {
        let resolver = PosixPathResolver::new("/home/user");
        let cases = [
            ("/tmp/test///", "/tmp/test"),
            ("/tmp/./a/../b", "/tmp/b"),
            ("/tmp/..test", "/tmp/..test"),
            ("/../..", "/"),
            ("//tmp//x", "/tmp/x"),
            ("docs", "/home/user/docs"),
            ("../other", "/home/other"),
            ("", "/home/user"),
            ("/", "/"),
        ];
        for (input, expected) in cases {
            assert_eq!(resolver.resolve(input).as_str(), expected, "{input}");
        }
    }

    #[test]
    fn test_cwd_is_normalized() {
        assert_eq!(PosixPathResolver::new("/a/b/../c/").cwd(), "/a/c");
        assert_eq!(PosixPathResolver::new("rel").cwd(), "/rel");
        assert_eq!(PosixPathResolver::default().cwd(), "/");
    }
}
