//! Cell references in A1 notation

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::coord::{letters_to_column, ColCoord, RowCoord};
use crate::error::{Error, Result};
use crate::kind::RefKind;
use crate::MAX_ROWS;

/// A single cell position: a column coordinate plus a row coordinate
///
/// Each axis carries its own [`RefKind`], so a reference may be
/// column-absolute/row-relative (`$B2`) and every other combination.
/// The kind is part of a reference's identity: `$B2` and `B2` are unequal
/// even though they address the same position.
///
/// Sorting by position goes through [`CellRef::cmp_position`] (column index
/// first, then row index), which deliberately ignores the kinds. A sorted
/// container keyed by that comparator will coalesce kind-distinct references
/// that a hash map keyed by the reference itself keeps apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    col: ColCoord,
    row: RowCoord,
}

impl CellRef {
    /// Create a reference from a column and a row coordinate
    pub fn new(col: ColCoord, row: RowCoord) -> Self {
        Self { col, row }
    }

    /// Create a reference with both axes relative (`B2` style)
    pub fn relative(col: u16, row: u32) -> Result<Self> {
        Ok(Self::new(
            RefKind::Relative.column(col)?,
            RefKind::Relative.row(row)?,
        ))
    }

    /// Create a reference with both axes absolute (`$B$2` style)
    pub fn absolute(col: u16, row: u32) -> Result<Self> {
        Ok(Self::new(
            RefKind::Absolute.column(col)?,
            RefKind::Absolute.row(row)?,
        ))
    }

    /// Parse a reference from A1-style notation
    ///
    /// A `$` before the column letters or the row number makes that axis
    /// absolute.
    ///
    /// # Examples
    /// ```
    /// use celldelta_core::{CellRef, RefKind};
    ///
    /// let addr = CellRef::parse("A1").unwrap();
    /// assert_eq!(addr.col().index(), 0);
    /// assert_eq!(addr.row().index(), 0);
    ///
    /// let addr = CellRef::parse("$B2").unwrap();
    /// assert_eq!(addr.col().kind(), RefKind::Absolute);
    /// assert_eq!(addr.row().kind(), RefKind::Relative);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidReference("empty reference".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        // Check for column absolute marker
        let col_kind = if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            RefKind::Absolute
        } else {
            RefKind::Relative
        };

        // Parse column letters
        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == col_start {
            return Err(Error::InvalidReference(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = letters_to_column(&s[col_start..pos])?;

        // Check for row absolute marker
        let row_kind = if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            RefKind::Absolute
        } else {
            RefKind::Relative
        };

        // Parse row number
        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidReference(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidReference(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in notation, 0-based internally
        if row == 0 {
            return Err(Error::InvalidReference(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        let row = row - 1;
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self::new(
            ColCoord::new(col, col_kind)?,
            RowCoord::new(row, row_kind)?,
        ))
    }

    /// Column coordinate
    pub fn col(self) -> ColCoord {
        self.col
    }

    /// Row coordinate
    pub fn row(self) -> RowCoord {
        self.row
    }

    /// New reference with the row replaced, keeping the column
    pub fn with_row(self, row: RowCoord) -> Self {
        Self { row, ..self }
    }

    /// New reference with the column replaced, keeping the row
    pub fn with_col(self, col: ColCoord) -> Self {
        Self { col, ..self }
    }

    /// Position sort key: (column index, row index), kinds excluded
    pub fn position(self) -> (u16, u32) {
        (self.col.index(), self.row.index())
    }

    /// Compare by position: column index first, then row index
    ///
    /// Kinds are not consulted, so two references that differ only in kind
    /// compare equal here while remaining unequal under `==`. Callers that
    /// need identity-preserving dedup must key on the reference itself, not
    /// on this comparator.
    pub fn cmp_position(self, other: Self) -> Ordering {
        self.position().cmp(&other.position())
    }

    /// Format as an A1-style string
    pub fn to_a1_string(self) -> String {
        format!("{}{}", self.col, self.row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col, self.row)
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
