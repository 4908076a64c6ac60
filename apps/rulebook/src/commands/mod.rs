pub mod clean;
pub mod install;
pub mod list;
pub mod sync;

use colored::Colorize;
use rulebook_core::SyncReport;

/// Print per-representation results; returns an error if any failed.
pub fn report_sync(report: &SyncReport) -> anyhow::Result<()> {
    for (assistant, count) in &report.regenerated {
        println!(
            "{} {} ({} file{})",
            "✓".green(),
            assistant.label(),
            count,
            if *count == 1 { "" } else { "s" }
        );
    }
    for (assistant, message) in &report.failures {
        eprintln!("{}: {} — {}", "Error".red(), assistant.label(), message);
    }
    if report.ok() {
        Ok(())
    } else {
        anyhow::bail!(
            "{} representation(s) failed to regenerate",
            report.failures.len()
        )
    }
}
