pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::HelperConfig;

pub use adapters::{resolver_for, NativePathResolver, PosixPathResolver, WindowsPathResolver};
pub use crate::core::filename::{check_file_name, valid_file_name};
pub use crate::core::helper::Helper;
pub use crate::core::path_containment::is_subdirectory_or_equal;
pub use crate::core::version::{compare_versions, version_compare, VERSION_PARSE_ERROR};
pub use domain::model::{FilenameViolation, PathPlatform, ResolvedPath};
pub use domain::ports::PathResolver;
pub use utils::error::{HelperError, Result};
