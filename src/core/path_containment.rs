use crate::domain::ports::PathResolver;

/// Returns `true` when `child` is `parent` itself or lies somewhere beneath it.
///
/// Both paths go through `resolver` first, so relative segments, `..` and
/// trailing separators are settled before comparing. A shared prefix only
/// counts when it ends on a separator: `/tmp/te` does not contain `/tmp/test`.
pub fn is_subdirectory_or_equal<R>(resolver: &R, parent: &str, child: &str) -> bool
where
    R: PathResolver + ?Sized,
{
    let parent = resolver.resolve(parent);
    let child = resolver.resolve(child);

    let parent_key = parent.comparison_key();
    let child_key = child.comparison_key();

    let contained = if parent_key == child_key {
        true
    } else {
        let separator = resolver.platform().separator();
        let mut prefix = parent_key;
        // Roots such as "/" and "C:\" already end with a separator.
        if !prefix.ends_with(separator) {
            prefix.push(separator);
        }
        child_key.starts_with(&prefix)
    };

    tracing::debug!(
        parent = %parent,
        child = %child,
        platform = %resolver.platform(),
        contained,
        "Checked path containment"
    );

    contained
}
