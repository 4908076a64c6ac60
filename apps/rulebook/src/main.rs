//! rulebook CLI.
//!
//! The `rulebook` command installs a source-of-truth rule tree into a
//! target repository and projects it into the representations each AI
//! coding assistant expects.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "rulebook")]
#[command(about = "Install and sync AI assistant rule sets in a repository")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Target repository (default: current directory)
    #[arg(short, long, default_value = ".", global = true)]
    project_dir: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a rule set plus memory/tool starters, then sync
    Install {
        /// Rule set to install
        #[arg(short, long, default_value = rulebook_core::DEFAULT_RULE_SET)]
        rule_set: String,
    },
    /// Regenerate all assistant representations from project_rules/
    Sync,
    /// Remove project_rules/ and all generated representations
    CleanRules,
    /// Remove everything rulebook manages, including memory/ and tools/
    CleanAll {
        /// Skip the interactive confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// List the rule sets available for install
    ListRules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    tracing::debug!("Using project directory: {}", cli.project_dir.display());

    match cli.command {
        Commands::Install { rule_set } => commands::install::execute(&cli.project_dir, &rule_set),
        Commands::Sync => commands::sync::execute(&cli.project_dir),
        Commands::CleanRules => commands::clean::execute_rules(&cli.project_dir),
        Commands::CleanAll { yes } => commands::clean::execute_all(&cli.project_dir, yes),
        Commands::ListRules => commands::list::execute(),
    }
}
