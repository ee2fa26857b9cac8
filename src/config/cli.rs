use crate::domain::model::PathPlatform;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "helper-kit")]
#[command(about = "File name, version and path containment checks")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check whether NAME is usable as a file name on every platform
    Filename { name: String },

    /// Compare two dotted version strings
    Version {
        #[arg(allow_hyphen_values = true)]
        v1: String,
        #[arg(allow_hyphen_values = true)]
        v2: String,
    },

    /// Check whether CHILD is PARENT or lies beneath it
    Contains {
        parent: String,
        child: String,

        /// Path rules to apply (overrides the config file)
        #[arg(long, value_enum)]
        platform: Option<PlatformArg>,

        /// Working directory for relative paths (overrides the config file)
        #[arg(long)]
        cwd: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Posix,
    Windows,
    Native,
}

impl PlatformArg {
    pub fn rules(self) -> Option<PathPlatform> {
        match self {
            PlatformArg::Posix => Some(PathPlatform::Posix),
            PlatformArg::Windows => Some(PathPlatform::Windows),
            PlatformArg::Native => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contains_with_overrides() {
        let cli = CliConfig::parse_from([
            "helper-kit",
            "--json",
            "contains",
            "C:\\Users\\User",
            "C:\\Users\\User\\.config",
            "--platform",
            "windows",
        ]);
        assert!(cli.json);
        match cli.command {
            Command::Contains {
                platform, cwd, ..
            } => {
                assert_eq!(platform.and_then(PlatformArg::rules), Some(PathPlatform::Windows));
                assert_eq!(cwd, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_version_allows_empty_argument() {
        let cli = CliConfig::parse_from(["helper-kit", "version", "2", ""]);
        match cli.command {
            Command::Version { v1, v2 } => {
                assert_eq!(v1, "2");
                assert_eq!(v2, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_native_platform_has_no_fixed_rules() {
        assert_eq!(PlatformArg::Native.rules(), None);
    }
}
