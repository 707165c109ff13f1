//! Cells: a reference bound to formula text

use std::cmp::Ordering;
use std::fmt;

use crate::reference::CellRef;

/// Opaque formula text attached to a cell
///
/// The content is carried verbatim for the formula engine; it is never
/// parsed, evaluated, or normalized here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormulaText(String);

impl FormulaText {
    /// Wrap formula text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormulaText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormulaText {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for FormulaText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// A cell: one reference bound to formula text
///
/// Equality considers both the reference and the formula. Position ordering
/// ([`Cell::cmp_position`]) delegates to the reference alone, so two cells at
/// the same position with different formulas are order-equal but not `==`.
/// Batch processing can dedup by position while using equality to detect
/// content changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    reference: CellRef,
    formula: FormulaText,
}

impl Cell {
    /// Bind a reference to formula text
    pub fn new(reference: CellRef, formula: impl Into<FormulaText>) -> Self {
        Self {
            reference,
            formula: formula.into(),
        }
    }

    /// The cell's reference
    pub fn reference(&self) -> CellRef {
        self.reference
    }

    /// The cell's formula text
    pub fn formula(&self) -> &FormulaText {
        &self.formula
    }

    /// Position sort key of the underlying reference
    pub fn position(&self) -> (u16, u32) {
        self.reference.position()
    }

    /// Compare by cell position; formula text never affects the rank
    pub fn cmp_position(&self, other: &Cell) -> Ordering {
        self.reference.cmp_position(other.reference)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.reference, self.formula)
    }
}
