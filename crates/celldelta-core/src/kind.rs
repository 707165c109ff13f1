//! Absolute/relative addressing kinds

use crate::coord::{ColCoord, RowCoord};
use crate::error::Result;

/// Addressing kind of a single coordinate
///
/// In A1 notation a `$`-prefixed axis (as in `$B$2`) is absolute: it stays
/// fixed when the containing formula is copied elsewhere. A bare axis is
/// relative. Each axis of a reference carries its own kind, so `$B2` and
/// `B$2` are both valid mixed forms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefKind {
    /// Moves with the formula (bare `B2` style)
    #[default]
    Relative,
    /// Stays fixed when the formula moves (`$B$2` style)
    Absolute,
}

impl RefKind {
    /// Build a column coordinate tagged with this kind
    ///
    /// Fails if `index` is outside the addressable column range.
    pub fn column(self, index: u16) -> Result<ColCoord> {
        ColCoord::new(index, self)
    }

    /// Build a row coordinate tagged with this kind
    ///
    /// Fails if `index` is outside the addressable row range.
    pub fn row(self, index: u32) -> Result<RowCoord> {
        RowCoord::new(index, self)
    }

    /// Check if this kind is absolute
    pub fn is_absolute(self) -> bool {
        matches!(self, RefKind::Absolute)
    }
}
