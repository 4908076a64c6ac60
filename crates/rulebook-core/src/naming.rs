//! Filename transforms: numeric ordering prefixes and extension policies.
//!
//! Pure string functions, no I/O. A numeric prefix is a leading run of
//! ASCII digits followed by a hyphen (`NN-`); projection strategies strip
//! it here and re-apply a fresh zero-padded one where they need ordering.

use std::path::Path;

/// How an output filename's extension is derived from the input's stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionPolicy {
    /// Keep the original extension unchanged.
    Keep,
    /// Strip the extension, leaving the stem only.
    Remove,
    /// Replace any extension with the given one (without the dot).
    Force(&'static str),
}

/// Split a leading `<digits>-` ordering prefix off a filename.
///
/// Returns `(digits, rest)` if the name starts with at least one ASCII
/// digit immediately followed by a hyphen.
pub fn split_numeric_prefix(name: &str) -> Option<(&str, &str)> {
    let (digits, rest) = name.split_once('-')?;
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some((digits, rest))
    } else {
        None
    }
}

/// The filename with any leading numeric prefix removed.
pub fn strip_numeric_prefix(name: &str) -> &str {
    split_numeric_prefix(name).map_or(name, |(_, rest)| rest)
}

pub fn has_numeric_prefix(name: &str) -> bool {
    split_numeric_prefix(name).is_some()
}

/// Compute an output filename: strip any numeric prefix, then apply the
/// extension policy to the remainder.
///
/// Dotfile-style names (`.gitignore`) are treated as stems without an
/// extension, matching `Path::file_stem`.
pub fn transform_filename(name: &str, policy: ExtensionPolicy) -> String {
    let base = strip_numeric_prefix(name);
    match policy {
        ExtensionPolicy::Keep => base.to_string(),
        ExtensionPolicy::Remove => stem_of(base).to_string(),
        ExtensionPolicy::Force(ext) => format!("{}.{}", stem_of(base), ext),
    }
}

fn stem_of(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_prefix_forms() {
        assert_eq!(split_numeric_prefix("01-intro.md"), Some(("01", "intro.md")));
        assert_eq!(split_numeric_prefix("153-x"), Some(("153", "x")));
        assert_eq!(split_numeric_prefix("intro.md"), None);
        assert_eq!(split_numeric_prefix("a1-intro.md"), None);
        assert_eq!(split_numeric_prefix("-intro.md"), None);
        assert_eq!(split_numeric_prefix("01intro.md"), None);
    }

    #[test]
    fn strip_prefix_is_identity_without_prefix() {
        assert_eq!(strip_numeric_prefix("plan.md"), "plan.md");
        assert_eq!(strip_numeric_prefix("02-plan.md"), "plan.md");
    }

    #[test]
    fn keep_restores_unprefixed_name() {
        assert_eq!(
            transform_filename("01-rules.md", ExtensionPolicy::Keep),
            "rules.md"
        );
        assert_eq!(
            transform_filename("rules.md", ExtensionPolicy::Keep),
            "rules.md"
        );
    }

    #[test]
    fn remove_strips_extension() {
        assert_eq!(
            transform_filename("01-rules.md", ExtensionPolicy::Remove),
            "rules"
        );
        // No extension: unchanged.
        assert_eq!(transform_filename("Makefile", ExtensionPolicy::Remove), "Makefile");
        // Only the last extension is stripped.
        assert_eq!(
            transform_filename("archive.tar.gz", ExtensionPolicy::Remove),
            "archive.tar"
        );
    }

    #[test]
    fn force_replaces_rather_than_appends() {
        assert_eq!(
            transform_filename("01-rules.md", ExtensionPolicy::Force("mdc")),
            "rules.mdc"
        );
        // No extension: gains the forced one.
        assert_eq!(
            transform_filename("notes", ExtensionPolicy::Force("mdc")),
            "notes.mdc"
        );
    }

    #[test]
    fn dotfile_stem_preserved() {
        assert_eq!(
            transform_filename(".gitignore", ExtensionPolicy::Remove),
            ".gitignore"
        );
    }
}
