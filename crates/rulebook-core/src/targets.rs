//! The five generated assistant representations.
//!
//! Each assistant maps to exactly one (strategy, destination) pair in a
//! static table, so adding a representation is a compile-checked change
//! rather than a string match.

use crate::naming::ExtensionPolicy;
use crate::project::{concatenate, flatten_and_number, restructure_and_strip};
use crate::{Result, TargetLayout};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assistant {
    Cursor,
    Cline,
    Roo,
    Windsurf,
    Copilot,
}

impl Assistant {
    pub fn label(self) -> &'static str {
        match self {
            Assistant::Cursor => "Cursor",
            Assistant::Cline => "Cline",
            Assistant::Roo => "RooCode",
            Assistant::Windsurf => "Windsurf",
            Assistant::Copilot => "GitHub Copilot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Flattened, renumbered copies in a single directory.
    FlattenAndNumber(ExtensionPolicy),
    /// Tree copy with prefix-stripped directory names and extensionless files.
    RestructureAndStrip,
    /// One concatenated document.
    Concatenate,
}

/// One generated output representation: a strategy plus where it lands
/// relative to the target repository root.
#[derive(Debug, Clone, Copy)]
pub struct AssistantTarget {
    pub assistant: Assistant,
    pub strategy: Strategy,
    pub rel_path: &'static str,
    /// Hidden parent directory that clean may prune once empty.
    pub prunable_parent: Option<&'static str>,
}

pub const ASSISTANT_TARGETS: [AssistantTarget; 5] = [
    AssistantTarget {
        assistant: Assistant::Cursor,
        strategy: Strategy::FlattenAndNumber(ExtensionPolicy::Force("mdc")),
        rel_path: ".cursor/rules",
        prunable_parent: Some(".cursor"),
    },
    AssistantTarget {
        assistant: Assistant::Cline,
        strategy: Strategy::FlattenAndNumber(ExtensionPolicy::Remove),
        rel_path: ".clinerules",
        prunable_parent: None,
    },
    AssistantTarget {
        assistant: Assistant::Roo,
        strategy: Strategy::RestructureAndStrip,
        rel_path: ".roo/rules",
        prunable_parent: Some(".roo"),
    },
    AssistantTarget {
        assistant: Assistant::Windsurf,
        strategy: Strategy::Concatenate,
        rel_path: ".windsurfrules",
        prunable_parent: None,
    },
    AssistantTarget {
        assistant: Assistant::Copilot,
        strategy: Strategy::Concatenate,
        rel_path: ".github/copilot-instructions.md",
        // .github commonly holds user-owned workflows; never pruned.
        prunable_parent: None,
    },
];

impl AssistantTarget {
    /// Absolute destination of this representation's artifact.
    pub fn artifact_path(&self, target: &TargetLayout) -> PathBuf {
        target.root().join(self.rel_path)
    }

    /// Whether the artifact is a single file (as opposed to a directory).
    pub fn is_file(&self) -> bool {
        matches!(self.strategy, Strategy::Concatenate)
    }

    /// Run this representation's projection from `source_dir`.
    pub fn project(&self, source_dir: &std::path::Path, target: &TargetLayout) -> Result<usize> {
        let dest = self.artifact_path(target);
        match self.strategy {
            Strategy::FlattenAndNumber(policy) => flatten_and_number(source_dir, &dest, policy),
            Strategy::RestructureAndStrip => restructure_and_strip(source_dir, &dest),
            Strategy::Concatenate => concatenate(source_dir, &dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_five_representations() {
        let assistants: Vec<_> = ASSISTANT_TARGETS.iter().map(|t| t.assistant).collect();
        assert_eq!(
            assistants,
            vec![
                Assistant::Cursor,
                Assistant::Cline,
                Assistant::Roo,
                Assistant::Windsurf,
                Assistant::Copilot
            ]
        );
    }

    #[test]
    fn concatenated_targets_are_files() {
        for t in &ASSISTANT_TARGETS {
            assert_eq!(t.is_file(), matches!(t.strategy, Strategy::Concatenate));
        }
    }
}
