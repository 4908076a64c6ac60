//! Ordered file enumeration over a source tree.
//!
//! Traversal order is deterministic and independent of filesystem return
//! order: names are sorted at each level, hidden entries are pruned, and
//! the collected list is sorted once more globally by full path. The
//! global sort is what downstream numbering and concatenation rely on;
//! interleaved ordering across directories requires the source data to
//! zero-pad its numeric prefixes to a consistent width.

use crate::error::{Result, RulebookError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerate every non-hidden file under `source_dir`, fully ordered.
///
/// The result is a pure function of directory contents at call time,
/// not a live iterator.
pub fn ordered_source_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    if !source_dir.is_dir() {
        return Err(RulebookError::SourceNotFound {
            path: source_dir.to_path_buf(),
        });
    }

    let mut files: Vec<PathBuf> = Vec::new();
    let walker = WalkDir::new(source_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Always include the root directory itself
            if e.path() == source_dir {
                return true;
            }
            !e.file_name().to_string_lossy().starts_with('.')
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {e}", source_dir.display());
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    // Authoritative order: byte order of the full path string.
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    tracing::debug!("Enumerated {} files under {}", files.len(), source_dir.display());
    Ok(files)
}
