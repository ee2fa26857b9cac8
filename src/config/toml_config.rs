use crate::domain::model::PathPlatform;
use crate::utils::error::{HelperError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const PLATFORM_CHOICES: &[&str] = &["posix", "windows", "native"];
pub const LOG_FORMAT_CHOICES: &[&str] = &["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HelperConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// `posix`, `windows` or `native`; defaults to native.
    pub platform: Option<String>,
    /// Working directory for relative paths.
    pub cwd: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Maps a platform choice to resolver rules; `native` is `None`.
pub fn parse_platform(value: &str) -> Result<Option<PathPlatform>> {
    match value.to_ascii_lowercase().as_str() {
        "posix" => Ok(Some(PathPlatform::Posix)),
        "windows" => Ok(Some(PathPlatform::Windows)),
        "native" => Ok(None),
        _ => Err(HelperError::InvalidConfigValueError {
            field: "paths.platform".to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", PLATFORM_CHOICES.join(", ")),
        }),
    }
}

impl HelperConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HelperError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HelperError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        let platform = match &self.paths.platform {
            Some(value) => {
                validation::validate_one_of(
                    "paths.platform",
                    &value.to_ascii_lowercase(),
                    PLATFORM_CHOICES,
                )?;
                parse_platform(value)?
            }
            None => None,
        };

        if let Some(cwd) = &self.paths.cwd {
            let rules = platform.unwrap_or_else(PathPlatform::host);
            validation::validate_absolute_path("paths.cwd", cwd, rules)?;
        }

        if let Some(format) = &self.logging.format {
            validation::validate_one_of("logging.format", format, LOG_FORMAT_CHOICES)?;
        }

        Ok(())
    }

    /// Selected path rules; `None` means the host's.
    pub fn platform(&self) -> Result<Option<PathPlatform>> {
        match &self.paths.platform {
            Some(value) => parse_platform(value),
            None => Ok(None),
        }
    }

    pub fn cwd(&self) -> Option<&str> {
        self.paths.cwd.as_deref()
    }

    pub fn log_format(&self) -> LogFormat {
        match self.logging.format.as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }
}

impl Validate for HelperConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
