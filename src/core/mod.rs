pub mod filename;
pub mod helper;
pub mod path_containment;
pub mod version;

pub use crate::domain::model::{FilenameViolation, PathPlatform, ResolvedPath};
pub use crate::domain::ports::PathResolver;
pub use crate::utils::error::Result;
