//! Windows path rules.
//!
//! Both `\` and `/` separate components on input; output always uses `\`.
//! Three root forms are recognised:
//! - drive roots (`C:\`), plus drive-relative `C:notes`
//! - UNC shares (`\\server\share\`)
//! - a bare leading separator, meaning the root of the working directory's volume
//!
//! Comparison keys are ASCII case-folded.

use crate::domain::model::{PathPlatform, ResolvedPath};
use crate::domain::ports::PathResolver;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Volume {
    Drive(char),
    Unc { server: String, share: String },
}

impl Volume {
    fn render(&self) -> String {
        match self {
            Volume::Drive(letter) => format!("{}:\\", letter),
            Volume::Unc { server, share } => format!("\\\\{}\\{}\\", server, share),
        }
    }
}

/// How a path string is anchored before its components are applied.
enum Anchor {
    Volume(Volume),
    DriveRelative(char),
    VolumeRoot,
    Relative,
}

fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Splits `path` into its anchor and the remainder holding its components.
fn split_anchor(path: &str) -> (Anchor, &str) {
    let bytes = path.as_bytes();

    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        let letter = (bytes[0] as char).to_ascii_uppercase();
        let rest = &path[2..];
        return if rest.starts_with(is_separator) {
            (Anchor::Volume(Volume::Drive(letter)), rest)
        } else {
            (Anchor::DriveRelative(letter), rest)
        };
    }

    if let Some(unc) = split_unc(path) {
        return unc;
    }

    if path.starts_with(is_separator) {
        (Anchor::VolumeRoot, path)
    } else {
        (Anchor::Relative, path)
    }
}

/// `\\server\share\rest` -> (`Unc`, `\rest`). Needs both a server and a share.
fn split_unc(path: &str) -> Option<(Anchor, &str)> {
    let mut chars = path.chars();
    if !(chars.next().is_some_and(is_separator) && chars.next().is_some_and(is_separator)) {
        return None;
    }

    let body = &path[2..];
    let server_end = body.find(is_separator)?;
    let server = &body[..server_end];
    let after_server = &body[server_end + 1..];
    let share_end = after_server.find(is_separator).unwrap_or(after_server.len());
    let share = &after_server[..share_end];

    if server.is_empty() || share.is_empty() {
        return None;
    }

    let volume = Volume::Unc {
        server: server.to_string(),
        share: share.to_string(),
    };
    Some((Anchor::Volume(volume), &after_server[share_end..]))
}

fn push_components(stack: &mut Vec<String>, path: &str) {
    for segment in path.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            name => stack.push(name.to_string()),
        }
    }
}

/// Windows rules over a fixed working directory.
#[derive(Debug, Clone)]
pub struct WindowsPathResolver {
    volume: Volume,
    cwd: Vec<String>,
}

impl WindowsPathResolver {
    /// `cwd` must name a volume (`C:\...` or `\\server\share\...`); otherwise
    /// it is placed on `C:`.
    pub fn new(cwd: impl AsRef<str>) -> Self {
        let cwd = cwd.as_ref();
        let (volume, rest) = match split_anchor(cwd) {
            (Anchor::Volume(volume), rest) => (volume, rest),
            (Anchor::DriveRelative(letter), rest) => (Volume::Drive(letter), rest),
            (_, rest) => (Volume::Drive('C'), rest),
        };

        let mut components = Vec::new();
        push_components(&mut components, rest);
        Self {
            volume,
            cwd: components,
        }
    }

    pub fn cwd(&self) -> String {
        render(&self.volume, &self.cwd)
    }

    /// True for `C:\...` and `\\server\share...`; drive-relative and
    /// volume-relative paths still depend on the working directory.
    pub fn is_absolute(path: &str) -> bool {
        matches!(split_anchor(path).0, Anchor::Volume(_))
    }
}

impl Default for WindowsPathResolver {
    fn default() -> Self {
        Self::new("C:\\")
    }
}

impl PathResolver for WindowsPathResolver {
    fn platform(&self) -> PathPlatform {
        PathPlatform::Windows
    }

    fn resolve(&self, path: &str) -> ResolvedPath {
        let (anchor, rest) = split_anchor(path);
        let (volume, mut components) = match anchor {
            Anchor::Volume(volume) => (volume, Vec::new()),
            Anchor::DriveRelative(letter) if self.volume == Volume::Drive(letter) => {
                (self.volume.clone(), self.cwd.clone())
            }
            Anchor::DriveRelative(letter) => (Volume::Drive(letter), Vec::new()),
            Anchor::VolumeRoot => (self.volume.clone(), Vec::new()),
            Anchor::Relative => (self.volume.clone(), self.cwd.clone()),
        };

        push_components(&mut components, rest);
        ResolvedPath::new(render(&volume, &components), PathPlatform::Windows)
    }
}

fn render(volume: &Volume, components: &[String]) -> String {
    let mut out = volume.render();
    out.push_str(&components.join("\\"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_normalizes() {
        let resolver = WindowsPathResolver::new("C:\\Users\\Default");
        let cases = [
            ("C:\\Users\\User\\", "C:\\Users\\User"),
            ("c:/Users//User/./x/..", "C:\\Users\\User"),
            ("D:\\", "D:\\"),
            ("D:", "D:\\"),
            ("C:notes", "C:\\Users\\Default\\notes"),
            ("E:notes", "E:\\notes"),
            ("\\Windows", "C:\\Windows"),
            ("Documents", "C:\\Users\\Default\\Documents"),
            ("..\\..\\..\\..", "C:\\"),
            ("\\\\server\\share\\dir\\", "\\\\server\\share\\dir"),
            ("//server/share", "\\\\server\\share\\"),
            ("", "C:\\Users\\Default"),
        ];
        for (input, expected) in cases {
            assert_eq!(resolver.resolve(input).as_str(), expected, "{input}");
        }
    }

    #[test]
    fn test_unc_cwd() {
        let resolver = WindowsPathResolver::new("\\\\nas\\backup\\joplin");
        assert_eq!(resolver.cwd(), "\\\\nas\\backup\\joplin");
        assert_eq!(resolver.resolve("..\\..").as_str(), "\\\\nas\\backup\\");
        assert_eq!(resolver.resolve("\\top").as_str(), "\\\\nas\\backup\\top");
    }

    #[test]
    fn test_cwd_without_volume_lands_on_c() {
        assert_eq!(WindowsPathResolver::new("Users\\me").cwd(), "C:\\Users\\me");
        assert_eq!(WindowsPathResolver::default().cwd(), "C:\\");
    }

    #[test]
    fn test_is_absolute() {
        assert!(WindowsPathResolver::is_absolute("C:\\"));
        assert!(WindowsPathResolver::is_absolute("d:/data"));
        assert!(WindowsPathResolver::is_absolute("\\\\nas\\share"));
        assert!(!WindowsPathResolver::is_absolute("C:data"));
        assert!(!WindowsPathResolver::is_absolute("\\data"));
        assert!(!WindowsPathResolver::is_absolute("data"));
    }

    #[test]
    fn test_comparison_key_folds_case() {
        let resolver = WindowsPathResolver::default();
        assert_eq!(
            resolver.resolve("C:\\Users").comparison_key(),
            resolver.resolve("c:\\USERS").comparison_key()
        );
    }
}
