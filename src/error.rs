//! UI Errors
//!
//! Programmer-facing failures. Nothing here reaches the user: handlers log
//! the error and leave state as it was.

use crate::form::FieldId;
use crate::models::PayloadKind;

/// Common result type for UI state operations
pub type UiResult<T> = Result<T, UiError>;

/// UI-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    UnknownProvider(String),
    /// A field write aimed at a draft that does not own the field
    FieldNotInDraft { field: FieldId, kind: PayloadKind },
    Config(String),
    /// Embedded sample records failed to parse
    Data(String),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::UnknownProvider(id) => write!(f, "Unknown payment provider: {}", id),
            UiError::FieldNotInDraft { field, kind } => {
                write!(f, "Field {:?} does not belong to the {} draft", field, kind.id())
            }
            UiError::Config(msg) => write!(f, "Config error: {}", msg),
            UiError::Data(msg) => write!(f, "Sample data error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
