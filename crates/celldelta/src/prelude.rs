//! Prelude module - common imports for celldelta users
//!
//! ```rust
//! use celldelta::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellRef,
    ColCoord,
    // Change batches
    Delta,
    DeltaBuilder,
    // Error types
    Error,
    FormulaText,
    GridSize,
    // Labels
    LabelDirectory,
    LabelMapping,
    LabelName,
    // Coordinates
    RefKind,
    Result,
    RowCoord,
    SpreadsheetId,
};
