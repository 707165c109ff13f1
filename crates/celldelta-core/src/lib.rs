//! # celldelta-core
//!
//! Core addressing and change-batch types for the celldelta spreadsheet
//! model.
//!
//! This crate provides the fundamental types:
//! - [`RefKind`], [`ColCoord`], [`RowCoord`] - absolute/relative coordinates
//! - [`CellRef`] - a single cell position in A1 notation
//! - [`LabelName`], [`LabelMapping`], [`LabelDirectory`] - symbolic aliases
//! - [`Cell`] - a reference bound to opaque formula text
//! - [`Delta`] - an immutable batch of cell changes for one spreadsheet
//!
//! ## Example
//!
//! ```rust
//! use celldelta_core::{Cell, CellRef, Delta, SpreadsheetId};
//!
//! let rate = CellRef::parse("$B$1").unwrap();
//! let delta = Delta::builder(SpreadsheetId::new(7))
//!     .set(Cell::new(rate, "0.0725"))
//!     .set(Cell::new(CellRef::parse("C2").unwrap(), "B1*A2"))
//!     .build();
//!
//! assert_eq!(delta.len(), 2);
//! assert_eq!(delta.get(rate).unwrap().formula().as_str(), "0.0725");
//! ```

pub mod cell;
pub mod coord;
pub mod delta;
pub mod dimensions;
pub mod error;
pub mod id;
pub mod kind;
pub mod label;
pub mod reference;

// Re-exports for convenience
pub use cell::{Cell, FormulaText};
pub use coord::{column_to_letters, letters_to_column, ColCoord, RowCoord};
pub use delta::{Delta, DeltaBuilder};
pub use dimensions::GridSize;
pub use error::{Error, Result};
pub use id::SpreadsheetId;
pub use kind::RefKind;
pub use label::{LabelDirectory, LabelMapping, LabelName};
pub use reference::CellRef;

/// Maximum number of rows in a grid (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a grid (Excel limit)
pub const MAX_COLS: u16 = 16_384;
