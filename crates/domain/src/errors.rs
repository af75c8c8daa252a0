//! Error types used throughout the engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for FieldSheet
///
/// Validation rejections (`HoursCapExceeded`, `RenameConflict`,
/// `InvalidPhaseCode`, `EditState`) are expected, recoverable conditions
/// handled at the point of mutation; only `Load` and `Save` cross the
/// engine boundary to the caller.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FieldSheetError {
    #[error("{employee} would exceed the daily hour cap with {total:.2} hours")]
    HoursCapExceeded { employee: String, total: f64 },

    #[error("Phase code {0} is already in use; consolidate its values manually before renaming")]
    RenameConflict(String),

    #[error("Invalid phase code: {0}")]
    InvalidPhaseCode(String),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Save error: {0}")]
    Save(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Edit state error: {0}")]
    EditState(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for FieldSheet operations
pub type Result<T> = std::result::Result<T, FieldSheetError>;
