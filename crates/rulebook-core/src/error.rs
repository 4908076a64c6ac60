use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulebookError {
    #[error("Rule set '{name}' not found under {search_dir}")]
    RuleSetNotFound { name: String, search_dir: PathBuf },

    #[error("Source directory does not exist: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Project rules directory not found: {path}")]
    NotInstalled { path: PathBuf },

    #[error("Pack directory not found (set RULEBOOK_HOME or reinstall): {searched:?}")]
    PackNotFound { searched: Vec<PathBuf> },

    #[error("Confirmation unavailable: {reason}")]
    ConfirmationUnavailable { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RulebookError>;
