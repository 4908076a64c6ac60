pub mod enumerate;
pub mod error;
pub mod install;
pub mod layout;
pub mod naming;
pub mod project;
pub mod sync;
pub mod targets;
pub mod utils;

pub use enumerate::ordered_source_files;
pub use error::{Result, RulebookError};
pub use install::{
    CleanAllOutcome, InstallReport, clean_all, clean_rules, install, list_rule_sets,
};
pub use layout::{DEFAULT_RULE_SET, PackLayout, TargetLayout};
pub use naming::{ExtensionPolicy, split_numeric_prefix, strip_numeric_prefix, transform_filename};
pub use sync::{SyncReport, sync};
pub use targets::{ASSISTANT_TARGETS, Assistant, AssistantTarget, Strategy};
