use crate::domain::model::FilenameViolation;

/// Characters rejected in a file name on at least one supported platform.
pub const ILLEGAL_FILENAME_CHARS: &[char] = &[':', '\\', '/', '|', '*', '?', '<', '>'];

/// Legacy device names that Windows reserves regardless of extension.
pub const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Checks `name` and reports the first reason it cannot be used as a file name.
pub fn check_file_name(name: &str) -> Result<(), FilenameViolation> {
    if name.is_empty() {
        return Err(FilenameViolation::Empty);
    }

    if let Some(c) = name.chars().find(|c| ILLEGAL_FILENAME_CHARS.contains(c)) {
        return Err(FilenameViolation::IllegalCharacter(c));
    }

    // "CON.txt" -> "CON", "nul" -> "nul"
    let stem = name.split('.').next().unwrap_or(name);
    let upper = stem.to_ascii_uppercase();
    if RESERVED_DEVICE_NAMES.contains(&upper.as_str()) {
        return Err(FilenameViolation::ReservedName(stem.to_string()));
    }

    Ok(())
}

/// Returns `true` when `name` is usable as a file name on every supported platform.
pub fn valid_file_name(name: &str) -> bool {
    match check_file_name(name) {
        Ok(()) => true,
        Err(violation) => {
            tracing::debug!(name = %name, reason = %violation, "Rejected file name");
            false
        }
    }
}
