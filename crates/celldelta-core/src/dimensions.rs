//! Grid dimensions

use std::fmt;

use crate::error::{Error, Result};
use crate::reference::CellRef;
use crate::{MAX_COLS, MAX_ROWS};

/// Row/column extent of one spreadsheet grid
///
/// The model types only enforce the hard addressing limits; a concrete grid
/// narrows them. The collaborator that owns spreadsheet metadata uses this
/// to range-check references against the actual sheet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    rows: u32,
    cols: u16,
}

impl GridSize {
    /// The largest addressable grid
    pub const MAX: GridSize = GridSize {
        rows: MAX_ROWS,
        cols: MAX_COLS,
    };

    /// Create grid dimensions
    ///
    /// Both extents must be at least 1 and within the addressing limits.
    pub fn new(rows: u32, cols: u16) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions(format!(
                "{}x{} grid is empty",
                rows, cols
            )));
        }
        if rows > MAX_ROWS {
            return Err(Error::RowOutOfBounds(rows - 1, MAX_ROWS - 1));
        }
        if cols > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(cols - 1, MAX_COLS - 1));
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows
    pub fn rows(self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(self) -> u16 {
        self.cols
    }

    /// Check if `reference` addresses a cell inside this grid
    pub fn contains(self, reference: CellRef) -> bool {
        reference.row().index() < self.rows && reference.col().index() < self.cols
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation() {
        assert!(GridSize::new(1, 1).is_ok());
        assert!(GridSize::new(MAX_ROWS, MAX_COLS).is_ok());
        assert!(matches!(
            GridSize::new(0, 10),
            Err(Error::InvalidDimensions(_))
        ));
        assert!(matches!(
            GridSize::new(10, 0),
            Err(Error::InvalidDimensions(_))
        ));
        assert!(matches!(
            GridSize::new(MAX_ROWS + 1, 1),
            Err(Error::RowOutOfBounds(..))
        ));
    }

    #[test]
    fn test_contains() {
        let grid = GridSize::new(100, 26).unwrap();

        assert!(grid.contains(CellRef::parse("A1").unwrap()));
        assert!(grid.contains(CellRef::parse("Z100").unwrap()));
        assert!(!grid.contains(CellRef::parse("AA1").unwrap()));
        assert!(!grid.contains(CellRef::parse("A101").unwrap()));

        // Kind does not affect containment
        assert!(grid.contains(CellRef::parse("$Z$100").unwrap()));
    }

    #[test]
    fn test_default_is_max() {
        assert_eq!(GridSize::default(), GridSize::MAX);
        assert_eq!(GridSize::MAX.to_string(), "1048576x16384");
    }
}
