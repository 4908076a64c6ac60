//! Path layout for the packaged starter content and the target repository.
//!
//! All fixed directory names live here as constants, but callers only ever
//! touch them through [`PackLayout`] and [`TargetLayout`] so that several
//! target repositories can be processed in one process without shared state.

use crate::error::{Result, RulebookError};
use std::path::{Path, PathBuf};

/// Subdirectory of the pack holding the named rule sets.
pub const RULE_SETS_DIR: &str = "rule_sets";
/// Pack-global starter documents for the `memory/` directory.
pub const MEMORY_STARTERS_DIR: &str = "memory_starters";
/// Pack-global starter scripts for the `tools/` directory.
pub const TOOL_STARTERS_DIR: &str = "tool_starters";

/// Authoritative source-of-truth tree inside the target repository.
pub const PROJECT_RULES_DIR: &str = "project_rules";
/// User-owned memory directory inside the target repository.
pub const MEMORY_DIR: &str = "memory";
/// User-owned tools directory inside the target repository.
pub const TOOLS_DIR: &str = "tools";

pub const DEFAULT_RULE_SET: &str = "light-spec";

pub const ENV_EXAMPLE_FILE: &str = ".env.example";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Environment variable overriding pack discovery.
pub const PACK_HOME_ENV: &str = "RULEBOOK_HOME";

/// Location of the packaged starter content (rule sets and starters).
#[derive(Debug, Clone)]
pub struct PackLayout {
    root: PathBuf,
}

impl PackLayout {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the pack root: `RULEBOOK_HOME` if set, then locations next
    /// to the running executable, then the development tree.
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os(PACK_HOME_ENV) {
            let root = PathBuf::from(home);
            if root.is_dir() {
                return Ok(Self::at(root));
            }
            return Err(RulebookError::PackNotFound {
                searched: vec![root],
            });
        }

        let mut searched = Vec::new();
        if let Ok(exe) = std::env::current_exe()
            && let Some(exe_dir) = exe.parent()
        {
            for candidate in [
                exe_dir.join("pack"),
                exe_dir.join("../share/rulebook/pack"),
            ] {
                if candidate.is_dir() {
                    return Ok(Self::at(candidate));
                }
                searched.push(candidate);
            }
        }

        // Development fallback: the pack/ directory at the workspace root.
        let dev = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../pack");
        if dev.is_dir() {
            return Ok(Self::at(dev));
        }
        searched.push(dev);

        Err(RulebookError::PackNotFound { searched })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn rule_sets_dir(&self) -> PathBuf {
        self.root.join(RULE_SETS_DIR)
    }

    pub fn rule_set_dir(&self, name: &str) -> PathBuf {
        self.rule_sets_dir().join(name)
    }

    pub fn memory_starters_dir(&self) -> PathBuf {
        self.root.join(MEMORY_STARTERS_DIR)
    }

    pub fn tool_starters_dir(&self) -> PathBuf {
        self.root.join(TOOL_STARTERS_DIR)
    }

    pub fn env_example(&self) -> PathBuf {
        self.root.join(ENV_EXAMPLE_FILE)
    }

    pub fn requirements(&self) -> PathBuf {
        self.root.join(REQUIREMENTS_FILE)
    }
}

/// Paths inside the target repository that rulebook reads or writes.
#[derive(Debug, Clone)]
pub struct TargetLayout {
    root: PathBuf,
}

impl TargetLayout {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The authoritative source tree. User-owned; replaced by install,
    /// removed by clean.
    pub fn project_rules_dir(&self) -> PathBuf {
        self.root.join(PROJECT_RULES_DIR)
    }

    pub fn memory_dir(&self) -> PathBuf {
        self.root.join(MEMORY_DIR)
    }

    pub fn tools_dir(&self) -> PathBuf {
        self.root.join(TOOLS_DIR)
    }

    pub fn env_example(&self) -> PathBuf {
        self.root.join(ENV_EXAMPLE_FILE)
    }

    pub fn requirements(&self) -> PathBuf {
        self.root.join(REQUIREMENTS_FILE)
    }
}
