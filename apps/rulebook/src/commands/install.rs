use anyhow::{Context, Result};
use colored::Colorize;
use rulebook_core::{PackLayout, RulebookError, TargetLayout, install, list_rule_sets};
use std::path::Path;

pub fn execute(project_dir: &Path, rule_set: &str) -> Result<()> {
    let pack = PackLayout::discover()?;
    let target = TargetLayout::at(
        project_dir
            .canonicalize()
            .with_context(|| format!("Target directory not found: {}", project_dir.display()))?,
    );

    println!(
        "Installing rule set '{}' into {}",
        rule_set.cyan(),
        target.root().display()
    );

    let report = match install(&pack, &target, rule_set) {
        Ok(report) => report,
        Err(RulebookError::RuleSetNotFound { name, search_dir }) => {
            eprintln!("{}: Rule set '{name}' not found", "Error".red());
            if let Ok(available) = list_rule_sets(&pack) {
                eprintln!("Available rule sets:");
                for rs in available {
                    eprintln!("  - {rs}");
                }
            } else {
                eprintln!("(no rule sets found under {})", search_dir.display());
            }
            anyhow::bail!("Rule set '{name}' not found");
        }
        Err(e) => return Err(e.into()),
    };

    if report.replaced_existing {
        println!("{} Replaced existing project_rules/", "✓".green());
    } else {
        println!("{} Created project_rules/", "✓".green());
    }
    println!(
        "{} Seeded memory/ ({} new) and tools/ ({} new)",
        "✓".green(),
        report.memory_added,
        report.tools_added
    );
    if report.env_example_copied {
        println!("{} Copied .env.example", "✓".green());
    }
    if report.requirements_copied {
        println!("{} Copied requirements.txt", "✓".green());
    }

    println!("\nGenerated assistant rules:");
    crate::commands::report_sync(&report.sync)?;

    // Advisory guidance only; nothing below changes state.
    println!("\n{}:", "Next steps".cyan());
    println!("1. Add the generated representations to .gitignore:");
    println!("   .cursor/rules/");
    println!("   .clinerules/");
    println!("   .roo/");
    println!("   .windsurfrules");
    println!("   .github/copilot-instructions.md");
    println!("2. Commit the new user-owned directories:");
    println!("   project_rules/  memory/  tools/");
    println!("3. Edit project_rules/ and run {} to regenerate.", "rulebook sync".cyan());

    Ok(())
}
