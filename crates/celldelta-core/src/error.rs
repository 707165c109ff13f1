//! Error types for celldelta-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in celldelta-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell reference format
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Label names must contain at least one character
    #[error("Label name cannot be empty")]
    EmptyLabelName,

    /// Label already defined in the directory
    #[error("Label '{0}' is already defined")]
    DuplicateLabel(String),

    /// Two cells in one delta share a reference
    #[error("Delta already contains a cell at {0}")]
    DuplicateCell(String),

    /// Grid dimensions outside the supported range
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimensions(String),
}
