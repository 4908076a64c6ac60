use anyhow::{Context, Result};
use colored::Colorize;
use rulebook_core::{
    CleanAllOutcome, PackLayout, RulebookError, TargetLayout, clean_all, clean_rules,
};
use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

pub fn execute_rules(project_dir: &Path) -> Result<()> {
    let target = target_layout(project_dir)?;
    let removed = clean_rules(&target)?;
    if removed.is_empty() {
        println!("Nothing to clean in {}", target.root().display());
        return Ok(());
    }
    for path in &removed {
        println!("{} Removed {}", "✓".green(), path.display());
    }
    println!("memory/ and tools/ were left untouched.");
    Ok(())
}

pub fn execute_all(project_dir: &Path, yes: bool) -> Result<()> {
    let pack = PackLayout::discover()?;
    let target = target_layout(project_dir)?;

    let confirm = |prompt: &str| -> rulebook_core::Result<bool> {
        if yes {
            return Ok(true);
        }
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return Err(RulebookError::ConfirmationUnavailable {
                reason: "stdin is not a terminal; pass --yes to confirm non-interactively".into(),
            });
        }
        print!("{prompt} [type 'yes' to confirm] ");
        std::io::stdout().flush().map_err(RulebookError::Io)?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line).map_err(RulebookError::Io)?;
        Ok(line.trim() == "yes")
    };

    match clean_all(&pack, &target, confirm)? {
        CleanAllOutcome::Aborted => {
            println!("Aborted; nothing was removed.");
            Ok(())
        }
        CleanAllOutcome::Cleaned(removed) => {
            for path in &removed {
                println!("{} Removed {}", "✓".green(), path.display());
            }
            println!(
                "{} Removed all rulebook-managed files from {}",
                "✓".green(),
                target.root().display()
            );
            Ok(())
        }
    }
}

fn target_layout(project_dir: &Path) -> Result<TargetLayout> {
    Ok(TargetLayout::at(project_dir.canonicalize().with_context(
        || format!("Target directory not found: {}", project_dir.display()),
    )?))
}
