//! Flatten-and-Number: copies every source file into one directory with
//! fresh zero-padded ordering prefixes.

use crate::enumerate::ordered_source_files;
use crate::error::Result;
use crate::naming::{ExtensionPolicy, has_numeric_prefix, transform_filename};
use crate::utils::paths::{copy_file, ensure_dir};
use std::fs;
use std::path::Path;

/// Project `source_dir` into `dest_dir` as a flat, numbered file list.
///
/// Numbering continues after any `NN-` entries already present in the
/// destination, so repeated invocations append rather than overwrite.
/// Callers wanting a clean regeneration delete `dest_dir` first (the
/// sync orchestrator does). Returns the number of files copied.
pub fn flatten_and_number(
    source_dir: &Path,
    dest_dir: &Path,
    policy: ExtensionPolicy,
) -> Result<usize> {
    ensure_dir(dest_dir)?;

    let files = ordered_source_files(source_dir)?;
    if files.is_empty() {
        tracing::info!("No source files in {} to number", source_dir.display());
        return Ok(0);
    }

    let mut next_num = count_numbered_entries(dest_dir)? + 1;
    let mut copied = 0;

    for source in &files {
        let base = source.file_name().and_then(|n| n.to_str());
        let Some(base) = base else {
            tracing::warn!("Skipping non-UTF-8 filename: {}", source.display());
            continue;
        };
        let new_name = format!("{:02}-{}", next_num, transform_filename(base, policy));
        let dest = dest_dir.join(&new_name);
        match copy_file(source, &dest) {
            Ok(()) => {
                tracing::debug!("Copied {} -> {}", source.display(), dest.display());
                next_num += 1;
                copied += 1;
            }
            Err(e) => {
                // One bad file must not block the rest of the projection.
                tracing::warn!("Failed to copy {}: {e}", source.display());
            }
        }
    }
    Ok(copied)
}

fn count_numbered_entries(dest_dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dest_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file()
            && has_numeric_prefix(&entry.file_name().to_string_lossy())
        {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, content).unwrap();
    }

    fn dest_names(dest: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dest)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn renumbers_discarding_original_prefixes() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        write(&src, "01-a.md", "a");
        write(&src, "02-b.md", "b");
        write(&src, "10-c.md", "c");

        let dest = tmp.path().join("dest");
        let n = flatten_and_number(&src, &dest, ExtensionPolicy::Force("mdc")).unwrap();
        assert_eq!(n, 3);
        assert_eq!(dest_names(&dest), vec!["01-a.mdc", "02-b.mdc", "03-c.mdc"]);
    }

    #[test]
    fn flattens_subdirectories_in_path_order() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        write(&src, "01-core/01-rule.md", "1");
        write(&src, "01-core/02-rule.md", "2");
        write(&src, "02-extra/01-more.md", "3");

        let dest = tmp.path().join("dest");
        flatten_and_number(&src, &dest, ExtensionPolicy::Remove).unwrap();
        assert_eq!(dest_names(&dest), vec!["01-rule", "02-rule", "03-more"]);
    }

    #[test]
    fn appends_after_existing_numbered_entries() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        write(&src, "01-a.md", "a");

        let dest = tmp.path().join("dest");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("01-old.md"), "old").unwrap();
        fs::write(dest.join("02-old.md"), "old").unwrap();
        fs::write(dest.join("unnumbered.md"), "old").unwrap();

        flatten_and_number(&src, &dest, ExtensionPolicy::Keep).unwrap();
        assert_eq!(
            dest_names(&dest),
            vec!["01-old.md", "02-old.md", "03-a.md", "unnumbered.md"]
        );
    }

    #[test]
    fn empty_source_creates_destination_and_copies_nothing() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();

        let dest = tmp.path().join("dest");
        let n = flatten_and_number(&src, &dest, ExtensionPolicy::Keep).unwrap();
        assert_eq!(n, 0);
        assert!(dest.is_dir());
        assert_eq!(dest_names(&dest), Vec::<String>::new());
    }
}
