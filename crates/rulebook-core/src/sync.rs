//! Sync orchestrator: regenerate every assistant representation from the
//! authoritative source tree.

use crate::TargetLayout;
use crate::error::{Result, RulebookError};
use crate::targets::{ASSISTANT_TARGETS, Assistant};
use crate::utils::paths::remove_path;

/// Outcome of one sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Each regenerated representation and the number of source files it
    /// materialized (copied, renamed, or appended).
    pub regenerated: Vec<(Assistant, usize)>,
    pub failures: Vec<(Assistant, String)>,
}

impl SyncReport {
    pub fn ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Delete and regenerate all five generated representations from
/// `project_rules/`.
///
/// Fails up front, touching nothing, if the authoritative tree is absent.
/// Afterwards each representation runs in its own failure scope: one
/// failing projection is recorded and the others still regenerate.
pub fn sync(target: &TargetLayout) -> Result<SyncReport> {
    let source = target.project_rules_dir();
    if !source.is_dir() {
        return Err(RulebookError::NotInstalled { path: source });
    }

    let mut report = SyncReport::default();
    for t in &ASSISTANT_TARGETS {
        let artifact = t.artifact_path(target);
        let result = remove_path(&artifact)
            .and_then(|_| t.project(&source, target));
        match result {
            Ok(count) => {
                tracing::debug!(
                    "Regenerated {} representation at {} ({count} files)",
                    t.assistant.label(),
                    artifact.display()
                );
                report.regenerated.push((t.assistant, count));
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to regenerate {} representation: {e}",
                    t.assistant.label()
                );
                report.failures.push((t.assistant, e.to_string()));
            }
        }
    }
    Ok(report)
}
