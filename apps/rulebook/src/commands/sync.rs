use anyhow::{Context, Result};
use colored::Colorize;
use rulebook_core::{RulebookError, TargetLayout, sync};
use std::path::Path;

pub fn execute(project_dir: &Path) -> Result<()> {
    let target = TargetLayout::at(
        project_dir
            .canonicalize()
            .with_context(|| format!("Target directory not found: {}", project_dir.display()))?,
    );

    println!("Syncing assistant rules from project_rules/ ...");
    match sync(&target) {
        Ok(report) => crate::commands::report_sync(&report),
        Err(RulebookError::NotInstalled { path }) => {
            eprintln!(
                "{}: Project rules directory not found: {}",
                "Error".red(),
                path.display()
            );
            eprintln!("Run {} first.", "rulebook install".cyan());
            anyhow::bail!("project_rules/ not found")
        }
        Err(e) => Err(e.into()),
    }
}
