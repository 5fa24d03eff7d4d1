use thiserror::Error;

use crate::change::ChangeKind;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("unknown language tag: {0}")]
    UnknownLanguage(String),

    #[error("template set is missing a non-empty `{kind}` template")]
    IncompleteTemplates { kind: ChangeKind },

    #[error("invalid template set: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiffError>;
