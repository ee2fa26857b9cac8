use crate::utils::error::{HelperError, Result};
use std::cmp::Ordering;

/// Returned by [`version_compare`] when either side is empty.
pub const VERSION_PARSE_ERROR: i32 = -2;

/// Compares two dotted version strings segment by segment.
///
/// Each segment counts as its leading run of digits (`"8-a"` is 8). A
/// segment without leading digits, or one missing because the other version
/// is longer, counts as 0. So `"2" < "2.1"`, `"3.11.8" == "3.11.8-a"` and
/// `"3.a.8" < "3.11.8"`.
///
/// # Errors
///
/// [`HelperError::EmptyVersion`] if either input is empty or whitespace.
pub fn compare_versions(v1: &str, v2: &str) -> Result<Ordering> {
    if v1.trim().is_empty() || v2.trim().is_empty() {
        return Err(HelperError::EmptyVersion);
    }

    let left: Vec<&str> = v1.split('.').map(segment_digits).collect();
    let right: Vec<&str> = v2.split('.').map(segment_digits).collect();

    for index in 0..left.len().max(right.len()) {
        let a = left.get(index).copied().unwrap_or("");
        let b = right.get(index).copied().unwrap_or("");
        match compare_digit_runs(a, b) {
            Ordering::Equal => continue,
            unequal => return Ok(unequal),
        }
    }

    Ok(Ordering::Equal)
}

/// Integer form of [`compare_versions`]: `-1`, `0`, `1`, or
/// [`VERSION_PARSE_ERROR`] for empty input.
pub fn version_compare(v1: &str, v2: &str) -> i32 {
    match compare_versions(v1, v2) {
        Ok(Ordering::Less) => -1,
        Ok(Ordering::Equal) => 0,
        Ok(Ordering::Greater) => 1,
        Err(e) => {
            tracing::debug!(v1 = %v1, v2 = %v2, error = %e, "Version comparison failed");
            VERSION_PARSE_ERROR
        }
    }
}

/// Leading digits of a segment with leading zeros dropped; `""` means 0.
fn segment_digits(segment: &str) -> &str {
    let s = segment.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].trim_start_matches('0')
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
