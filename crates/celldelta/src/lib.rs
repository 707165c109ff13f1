//! # celldelta
//!
//! Spreadsheet addressing and change batches: cell references with
//! absolute/relative anchors, symbolic labels, and immutable per-spreadsheet
//! deltas.
//!
//! The model is deliberately small. A [`CellRef`] is a (column, row) pair of
//! kind-tagged coordinates; a [`Cell`] binds a reference to opaque formula
//! text; a [`Delta`] is an immutable batch of cells scoped to one
//! [`SpreadsheetId`]. Labels alias references through a [`LabelDirectory`].
//! Formula parsing, evaluation, and persistence live in other layers.
//!
//! ## Example
//!
//! ```rust
//! use celldelta::prelude::*;
//!
//! // Addresses understand $-anchors per axis
//! let rate = CellRef::parse("$B$1").unwrap();
//! let total = CellRef::parse("C2").unwrap();
//!
//! // Give the rate cell a memorable alias
//! let mut labels = LabelDirectory::new();
//! labels
//!     .define(LabelMapping::new(LabelName::new("TaxRate").unwrap(), rate))
//!     .unwrap();
//!
//! // Record a batch of changes against spreadsheet 7
//! let delta = Delta::builder(SpreadsheetId::new(7))
//!     .set(Cell::new(rate, "0.0725"))
//!     .set(Cell::new(total, "B1*A2"))
//!     .build();
//!
//! assert_eq!(delta.len(), 2);
//! assert_eq!(labels.resolve("TaxRate"), Some(rate));
//! ```

pub mod prelude;

// Re-export core types
pub use celldelta_core::{
    column_to_letters,
    letters_to_column,
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
    MAX_COLS,
    // Constants
    MAX_ROWS,
};
