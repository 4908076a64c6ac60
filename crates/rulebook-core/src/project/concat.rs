//! Concatenate: all source documents joined into a single UTF-8 file with
//! provenance separators.

use crate::enumerate::ordered_source_files;
use crate::error::Result;
use crate::utils::paths::ensure_dir;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Concatenate every enumerated file under `source_dir` into `dest_file`.
///
/// Each appended file after the first is preceded by a separator naming
/// it. Content is written verbatim; if the last file does not end in a
/// newline one is appended, so non-empty output always ends in a
/// newline. A source directory with zero files
/// still produces `dest_file` (empty). Binary content is unsupported: a
/// file that fails to read as UTF-8 is reported and skipped along with
/// its separator. Returns the number of files appended.
pub fn concatenate(source_dir: &Path, dest_file: &Path) -> Result<usize> {
    let files = ordered_source_files(source_dir)?;

    if let Some(parent) = dest_file.parent() {
        ensure_dir(parent)?;
    }
    let out = File::create(dest_file)
        .with_context(|| format!("Failed to create {}", dest_file.display()))?;
    let mut out = BufWriter::new(out);

    let mut appended = 0;
    let mut ends_with_newline = true;
    for source in &files {
        let content = match fs::read_to_string(source) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}", source.display());
                continue;
            }
        };
        if appended > 0 {
            let name = source.file_name().unwrap_or_default().to_string_lossy();
            write!(out, "\n# --- Appended from: {name} ---\n\n")
                .with_context(|| format!("Failed to write {}", dest_file.display()))?;
        }
        out.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write {}", dest_file.display()))?;
        ends_with_newline = content.ends_with('\n');
        appended += 1;
    }
    if appended > 0 && !ends_with_newline {
        out.write_all(b"\n")
            .with_context(|| format!("Failed to write {}", dest_file.display()))?;
    }

    out.flush()
        .with_context(|| format!("Failed to flush {}", dest_file.display()))?;
    Ok(appended)
}
