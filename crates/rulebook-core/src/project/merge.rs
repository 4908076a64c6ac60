//! Non-Destructive Tree Merge: adds what is missing, never touches what
//! exists.

use crate::error::Result;
use crate::utils::paths::{copy_dir_recursive, copy_file, ensure_dir};
use std::fs;
use std::path::Path;

/// Merge `src_dir` into `dest_dir`, copying only entries absent from the
/// destination. A directory that already exists is recursed into so a
/// partially populated destination still receives missing descendants.
/// Pre-existing destination content is never modified or removed.
///
/// Returns the number of new items (files or whole subtrees) copied.
/// A missing `src_dir` is a warning, not an error.
pub fn merge_non_destructive(src_dir: &Path, dest_dir: &Path) -> Result<usize> {
    ensure_dir(dest_dir)?;

    if !src_dir.is_dir() {
        tracing::warn!(
            "Source directory for non-destructive copy not found: {}",
            src_dir.display()
        );
        return Ok(0);
    }

    let mut entries: Vec<_> = fs::read_dir(src_dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut new_items = 0;
    for entry in entries {
        let dest_item = dest_dir.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            if dest_item.exists() {
                new_items += merge_non_destructive(&entry.path(), &dest_item)?;
            } else {
                copy_dir_recursive(&entry.path(), &dest_item)?;
                new_items += 1;
            }
        } else if !dest_item.exists() {
            match copy_file(&entry.path(), &dest_item) {
                Ok(()) => new_items += 1,
                Err(e) => tracing::warn!("Failed to copy {}: {e}", entry.path().display()),
            }
        }
    }
    Ok(new_items)
}
