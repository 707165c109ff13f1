//! Change batches scoped to one spreadsheet

use std::cmp::Ordering;
use std::fmt;

use ahash::AHashMap;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::id::SpreadsheetId;
use crate::reference::CellRef;

/// An immutable batch of cell changes for one spreadsheet
///
/// A delta owns a snapshot of its cells: whatever collection the caller
/// built it from can be mutated afterwards without the delta observing it.
/// No two cells in a delta share a [`CellRef`]: [`Delta::new`] rejects a
/// batch containing duplicates, while [`DeltaBuilder`] keeps the last write
/// per reference instead.
///
/// Equality is structural over (id, cells-as-a-set): the order cells were
/// supplied in never matters, only membership does. An empty batch is valid
/// and reports zero changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "DeltaWire", try_from = "DeltaWire")
)]
pub struct Delta {
    id: SpreadsheetId,
    cells: AHashMap<CellRef, Cell>,
}

impl Delta {
    /// Build a delta from a batch of cells
    ///
    /// Takes an ownership snapshot of the batch. Fails with
    /// [`Error::DuplicateCell`] if two cells share a reference; use
    /// [`Delta::builder`] when last-write-wins is wanted.
    pub fn new(id: SpreadsheetId, cells: impl IntoIterator<Item = Cell>) -> Result<Self> {
        let iter = cells.into_iter();
        let mut map = AHashMap::with_capacity(iter.size_hint().0);
        for cell in iter {
            let reference = cell.reference();
            if map.insert(reference, cell).is_some() {
                return Err(Error::DuplicateCell(reference.to_string()));
            }
        }
        Ok(Self { id, cells: map })
    }

    /// A delta reporting zero changes
    pub fn empty(id: SpreadsheetId) -> Self {
        Self {
            id,
            cells: AHashMap::new(),
        }
    }

    /// Start building a delta with last-write-wins semantics per reference
    pub fn builder(id: SpreadsheetId) -> DeltaBuilder {
        DeltaBuilder::new(id)
    }

    /// Identity of the spreadsheet this batch applies to
    pub fn id(&self) -> SpreadsheetId {
        self.id
    }

    /// Number of changed cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the batch reports zero changes
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if the batch contains a cell at `reference`
    ///
    /// Membership uses reference equality, so `$A$1` and `A1` are distinct
    /// entries.
    pub fn contains(&self, reference: CellRef) -> bool {
        self.cells.contains_key(&reference)
    }

    /// The cell at `reference`, if present
    pub fn get(&self, reference: CellRef) -> Option<&Cell> {
        self.cells.get(&reference)
    }

    /// Iterate over the cells in arbitrary order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Cells in position order
    ///
    /// Position ties between kind-distinct references are broken by kind so
    /// the order is stable.
    pub fn cells_sorted(&self) -> Vec<&Cell> {
        let mut cells: Vec<&Cell> = self.cells.values().collect();
        cells.sort_by(|a, b| stable_cmp(a, b));
        cells
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delta {}: [", self.id)?;
        for (i, cell) in self.cells_sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

/// Position order with a kind tie-break; total over distinct references
fn stable_cmp(a: &Cell, b: &Cell) -> Ordering {
    a.cmp_position(b).then_with(|| {
        let a_kinds = (a.reference().col().kind(), a.reference().row().kind());
        let b_kinds = (b.reference().col().kind(), b.reference().row().kind());
        a_kinds.cmp(&b_kinds)
    })
}

/// Builder accumulating cells for one spreadsheet
///
/// Unlike [`Delta::new`], a later [`set`](DeltaBuilder::set) for an already
/// written reference replaces the earlier cell, mirroring how edits to a
/// sheet overwrite in place.
#[derive(Debug, Clone)]
pub struct DeltaBuilder {
    id: SpreadsheetId,
    cells: AHashMap<CellRef, Cell>,
}

impl DeltaBuilder {
    /// Start an empty builder for `id`
    pub fn new(id: SpreadsheetId) -> Self {
        Self {
            id,
            cells: AHashMap::new(),
        }
    }

    /// Write a cell, replacing any earlier write at the same reference
    pub fn set(mut self, cell: Cell) -> Self {
        self.cells.insert(cell.reference(), cell);
        self
    }

    /// Drop any pending cell at `reference`
    pub fn unset(mut self, reference: CellRef) -> Self {
        self.cells.remove(&reference);
        self
    }

    /// Number of pending cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Finish the batch
    pub fn build(self) -> Delta {
        Delta {
            id: self.id,
            cells: self.cells,
        }
    }
}

/// Serialized shape of a [`Delta`]: cells as a position-ordered sequence
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DeltaWire {
    id: SpreadsheetId,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl From<Delta> for DeltaWire {
    fn from(delta: Delta) -> Self {
        let mut cells: Vec<Cell> = delta.cells.into_iter().map(|(_, cell)| cell).collect();
        cells.sort_by(stable_cmp);
        Self {
            id: delta.id,
            cells,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<DeltaWire> for Delta {
    type Error = Error;

    fn try_from(wire: DeltaWire) -> Result<Self> {
        Delta::new(wire.id, wire.cells)
    }
}
