use crate::adapters::{PosixPathResolver, WindowsPathResolver};
use crate::domain::model::PathPlatform;
use crate::utils::error::{HelperError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Checks that `path` is already absolute under `platform`'s rules, i.e.
/// it does not depend on any working directory.
pub fn validate_absolute_path(field_name: &str, path: &str, platform: PathPlatform) -> Result<()> {
    validate_path(field_name, path)?;

    let anchored = match platform {
        PathPlatform::Posix => PosixPathResolver::is_absolute(path),
        PathPlatform::Windows => WindowsPathResolver::is_absolute(path),
    };

    if !anchored {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!("Path must be absolute for the {} platform", platform),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(HelperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("paths.cwd", "/home/user").is_ok());
        assert!(validate_path("paths.cwd", "").is_err());
        assert!(validate_path("paths.cwd", "/tmp/\0x").is_err());
    }

    #[test]
    fn test_validate_absolute_path() {
        assert!(validate_absolute_path("paths.cwd", "/srv", PathPlatform::Posix).is_ok());
        assert!(validate_absolute_path("paths.cwd", "srv", PathPlatform::Posix).is_err());

        assert!(validate_absolute_path("paths.cwd", "C:\\Users", PathPlatform::Windows).is_ok());
        assert!(validate_absolute_path("paths.cwd", "\\\\nas\\share", PathPlatform::Windows).is_ok());
        assert!(validate_absolute_path("paths.cwd", "\\Users", PathPlatform::Windows).is_err());
        assert!(validate_absolute_path("paths.cwd", "C:Users", PathPlatform::Windows).is_err());
        assert!(validate_absolute_path("paths.cwd", "Users", PathPlatform::Windows).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "xml", &["compact", "json"]).is_err());
    }
}
