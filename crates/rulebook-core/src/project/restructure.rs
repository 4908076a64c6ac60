//! Restructure-and-Strip: a verbatim tree copy whose directory names lose
//! their numeric prefixes and whose files lose their extensions.

use crate::error::{Result, RulebookError};
use crate::naming::{has_numeric_prefix, strip_numeric_prefix};
use crate::utils::paths::{copy_dir_recursive, remove_path};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Destructively replace `dest_dir` with a restructured copy of
/// `source_dir`. Returns the number of rename operations performed.
///
/// Both rename passes act on fully materialized path lists collected
/// before any rename happens; directories are processed deepest-first so
/// a child is renamed before its parent invalidates its path.
pub fn restructure_and_strip(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    if !source_dir.is_dir() {
        return Err(RulebookError::SourceNotFound {
            path: source_dir.to_path_buf(),
        });
    }

    remove_path(dest_dir)?;
    copy_dir_recursive(source_dir, dest_dir)?;

    let mut renamed = rename_prefixed_directories(dest_dir)?;
    renamed += strip_file_extensions(dest_dir)?;
    Ok(renamed)
}

fn rename_prefixed_directories(dest_dir: &Path) -> Result<usize> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dest_dir).follow_links(false) {
        let entry = entry.map_err(anyhow::Error::from)?;
        if entry.path() == dest_dir || !entry.file_type().is_dir() {
            continue;
        }
        if has_numeric_prefix(&entry.file_name().to_string_lossy()) {
            dirs.push(entry.into_path());
        }
    }
    // Deepest first: children before parents.
    dirs.sort_by_key(|p| std::cmp::Reverse(p.components().count()));

    let mut renamed = 0;
    for old in dirs {
        let name = old.file_name().unwrap_or_default().to_string_lossy();
        let new = old.with_file_name(strip_numeric_prefix(&name).to_string());
        if new.exists() {
            tracing::warn!(
                "Target directory {} already exists; keeping {}",
                new.display(),
                old.display()
            );
            continue;
        }
        match fs::rename(&old, &new) {
            Ok(()) => renamed += 1,
            Err(e) => tracing::warn!("Failed to rename {}: {e}", old.display()),
        }
    }
    Ok(renamed)
}

fn strip_file_extensions(dest_dir: &Path) -> Result<usize> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dest_dir).follow_links(false) {
        let entry = entry.map_err(anyhow::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        if entry.path().extension().is_some() {
            files.push(entry.into_path());
        }
    }

    let mut renamed = 0;
    for old in files {
        let new = old.with_extension("");
        if new.exists() {
            tracing::warn!(
                "Target file {} already exists; keeping {}",
                new.display(),
                old.display()
            );
            continue;
        }
        match fs::rename(&old, &new) {
            Ok(()) => renamed += 1,
            Err(e) => tracing::warn!("Failed to rename {}: {e}", old.display()),
        }
    }
    Ok(renamed)
}
