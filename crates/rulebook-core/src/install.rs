//! Install, clean, and list operations over a target repository.
//!
//! Install seeds the user-owned trees (`project_rules/`, `memory/`,
//! `tools/`) and then materializes the generated representations via one
//! sync. Clean-rules removes the authoritative tree and every generated
//! artifact; clean-all additionally removes the user-owned auxiliary
//! directories, behind an injected confirmation capability.

use crate::error::{Result, RulebookError};
use crate::layout::{MEMORY_STARTERS_DIR, TOOL_STARTERS_DIR};
use crate::project::merge_non_destructive;
use crate::sync::{SyncReport, sync};
use crate::targets::ASSISTANT_TARGETS;
use crate::utils::paths::{copy_dir_recursive, copy_file, ensure_dir, remove_path};
use crate::{PackLayout, TargetLayout};

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct InstallReport {
    pub rule_set: String,
    /// Whether an existing `project_rules/` tree was replaced.
    pub replaced_existing: bool,
    pub memory_added: usize,
    pub tools_added: usize,
    pub env_example_copied: bool,
    pub requirements_copied: bool,
    pub sync: SyncReport,
}

/// Install the named rule set into the target repository.
///
/// An existing `project_rules/` is fully replaced (not merged); the
/// `memory/` and `tools/` directories are seeded non-destructively,
/// preferring starters embedded in the rule set over the pack-global
/// ones; the optional flat files are copied only if absent.
pub fn install(pack: &PackLayout, target: &TargetLayout, rule_set: &str) -> Result<InstallReport> {
    let rule_set_dir = pack.rule_set_dir(rule_set);
    if !rule_set_dir.is_dir() {
        return Err(RulebookError::RuleSetNotFound {
            name: rule_set.to_string(),
            search_dir: pack.rule_sets_dir(),
        });
    }

    let rules_dest = target.project_rules_dir();
    let replaced_existing = remove_path(&rules_dest)?;
    copy_rule_tree(&rule_set_dir, &rules_dest)?;

    // Starters embedded in the rule set win over the pack-global ones.
    let memory_src = prefer_rule_set_dir(&rule_set_dir, MEMORY_STARTERS_DIR, pack.memory_starters_dir());
    let tools_src = prefer_rule_set_dir(&rule_set_dir, TOOL_STARTERS_DIR, pack.tool_starters_dir());
    let memory_added = merge_non_destructive(&memory_src, &target.memory_dir())?;
    let tools_added = merge_non_destructive(&tools_src, &target.tools_dir())?;

    let env_example_copied = copy_if_absent(&pack.env_example(), &target.env_example())?;
    let requirements_copied = copy_if_absent(&pack.requirements(), &target.requirements())?;

    let sync_report = sync(target)?;

    Ok(InstallReport {
        rule_set: rule_set.to_string(),
        replaced_existing,
        memory_added,
        tools_added,
        env_example_copied,
        requirements_copied,
        sync: sync_report,
    })
}

/// Copy a rule-set tree into `project_rules/`, leaving behind the
/// embedded starter directories (they seed `memory/`/`tools/`, and are
/// not rule documents) and hidden entries.
fn copy_rule_tree(rule_set_dir: &Path, dest: &Path) -> Result<()> {
    ensure_dir(dest)?;
    let mut entries: Vec<_> = fs::read_dir(rule_set_dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let name = entry.file_name();
        let name_str = name.to_string_lossy();
        if name_str.starts_with('.')
            || name_str == MEMORY_STARTERS_DIR
            || name_str == TOOL_STARTERS_DIR
        {
            continue;
        }
        let target_path = dest.join(&name);
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target_path)?;
        } else {
            copy_file(&entry.path(), &target_path)?;
        }
    }
    Ok(())
}

fn prefer_rule_set_dir(rule_set_dir: &Path, subdir: &str, global: PathBuf) -> PathBuf {
    let specific = rule_set_dir.join(subdir);
    if specific.is_dir() { specific } else { global }
}

fn copy_if_absent(src: &Path, dest: &Path) -> Result<bool> {
    if !src.is_file() || dest.exists() {
        return Ok(false);
    }
    copy_file(src, dest)?;
    Ok(true)
}

/// Remove the authoritative tree and all generated artifacts.
///
/// Never touches `memory/`, `tools/`, or the flat files. Returns the
/// paths actually removed.
pub fn clean_rules(target: &TargetLayout) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for t in &ASSISTANT_TARGETS {
        let artifact = t.artifact_path(target);
        match remove_path(&artifact) {
            Ok(true) => removed.push(artifact),
            Ok(false) => {}
            Err(e) => tracing::warn!("Failed to remove {}: {e}", artifact.display()),
        }
        // Prune the now-empty hidden parent; remove_dir fails on
        // non-empty directories, which is exactly what we want.
        if let Some(parent) = t.prunable_parent {
            let _ = fs::remove_dir(target.root().join(parent));
        }
    }

    let rules_dir = target.project_rules_dir();
    if remove_path(&rules_dir)? {
        removed.push(rules_dir);
    }

    Ok(removed)
}

#[derive(Debug)]
pub enum CleanAllOutcome {
    /// The user declined; nothing was touched. Treated as success.
    Aborted,
    Cleaned(Vec<PathBuf>),
}

/// Remove everything rulebook manages: the authoritative tree, generated
/// artifacts, the auxiliary `memory/`/`tools/` directories, and any flat
/// files the pack ships.
///
/// `confirm` is the injected confirmation capability: it receives a
/// prompt and answers whether to proceed. An `Err` from it (for example
/// a non-interactive context) aborts with an error; `Ok(false)` is a
/// successful no-op.
pub fn clean_all<F>(pack: &PackLayout, target: &TargetLayout, confirm: F) -> Result<CleanAllOutcome>
where
    F: FnOnce(&str) -> Result<bool>,
{
    let prompt = format!(
        "Remove project_rules/, memory/, tools/ and all generated rule files from {}?",
        target.root().display()
    );
    if !confirm(&prompt)? {
        return Ok(CleanAllOutcome::Aborted);
    }

    let mut removed = clean_rules(target)?;
    for dir in [target.memory_dir(), target.tools_dir()] {
        if remove_path(&dir)? {
            removed.push(dir);
        }
    }
    // Only remove flat files the pack actually ships; same-named files
    // in unrelated projects are not ours to delete.
    for (src, dest) in [
        (pack.env_example(), target.env_example()),
        (pack.requirements(), target.requirements()),
    ] {
        if src.is_file() && remove_path(&dest)? {
            removed.push(dest);
        }
    }

    Ok(CleanAllOutcome::Cleaned(removed))
}

/// Names of the installable rule sets, sorted. Entries starting with `.`
/// or `_` are reserved and excluded.
pub fn list_rule_sets(pack: &PackLayout) -> Result<Vec<String>> {
    let dir = pack.rule_sets_dir();
    if !dir.is_dir() {
        return Err(RulebookError::SourceNotFound { path: dir });
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}
