use anyhow::Result;
use colored::Colorize;
use rulebook_core::{DEFAULT_RULE_SET, PackLayout, list_rule_sets};

pub fn execute() -> Result<()> {
    let pack = PackLayout::discover()?;
    let rule_sets = list_rule_sets(&pack)?;

    if rule_sets.is_empty() {
        println!("No rule sets found under {}", pack.rule_sets_dir().display());
        return Ok(());
    }

    println!("Available rule sets:");
    for name in rule_sets {
        if name == DEFAULT_RULE_SET {
            println!("  {} {}", name.cyan(), "(default)".dimmed());
        } else {
            println!("  {name}");
        }
    }
    Ok(())
}
