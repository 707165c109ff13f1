//! Symbolic labels for cell references
//!
//! Labels give a cell reference a memorable alias, so collaborating layers
//! can talk about `TaxRate` instead of `$B$1`.
//!
//! # Example
//!
//! ```
//! use celldelta_core::{CellRef, LabelDirectory, LabelMapping, LabelName};
//!
//! let mut directory = LabelDirectory::new();
//! let rate = LabelName::new("TaxRate").unwrap();
//! directory.define(LabelMapping::new(rate, CellRef::parse("$B$1").unwrap())).unwrap();
//!
//! assert_eq!(directory.resolve("TaxRate").unwrap().to_string(), "$B$1");
//! ```

use std::borrow::Borrow;
use std::fmt;

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::reference::CellRef;

/// A label name, compared by literal content
///
/// Names are case-sensitive: `Rate` and `rate` are two different labels.
/// The empty string is not a valid name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelName(String);

impl LabelName {
    /// Create a label name; fails if `name` is empty
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyLabelName);
        }
        Ok(Self(name))
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LabelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LabelName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LabelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A label bound to one concrete cell reference
///
/// The association is 1:1 and immutable; "updating" a mapping means
/// replacing it wholesale (see [`LabelMapping::with_target`] or
/// [`LabelDirectory::define_or_update`]). Equality is structural over both
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelMapping {
    label: LabelName,
    target: CellRef,
}

impl LabelMapping {
    /// Associate a label with a target reference
    pub fn new(label: LabelName, target: CellRef) -> Self {
        Self { label, target }
    }

    /// The label
    pub fn label(&self) -> &LabelName {
        &self.label
    }

    /// The reference the label resolves to
    pub fn target(&self) -> CellRef {
        self.target
    }

    /// New mapping with the same label pointing at a different target
    pub fn with_target(self, target: CellRef) -> Self {
        Self { target, ..self }
    }
}

impl fmt::Display for LabelMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label, self.target)
    }
}

/// Collection of label mappings with by-name lookup
///
/// Lookup is case-sensitive, matching [`LabelName`] equality.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelDirectory {
    mappings: AHashMap<LabelName, CellRef>,
}

impl LabelDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new label
    ///
    /// Returns an error if the label is already defined.
    pub fn define(&mut self, mapping: LabelMapping) -> Result<()> {
        if self.mappings.contains_key(mapping.label.as_str()) {
            return Err(Error::DuplicateLabel(mapping.label.0));
        }
        self.mappings.insert(mapping.label, mapping.target);
        Ok(())
    }

    /// Define or replace a label wholesale
    pub fn define_or_update(&mut self, mapping: LabelMapping) {
        self.mappings.insert(mapping.label, mapping.target);
    }

    /// Resolve a label to its reference
    pub fn resolve(&self, name: &str) -> Option<CellRef> {
        self.mappings.get(name).copied()
    }

    /// Remove a label, returning the reference it pointed at
    pub fn remove(&mut self, name: &str) -> Option<CellRef> {
        self.mappings.remove(name)
    }

    /// Check if a label is defined
    pub fn contains(&self, name: &str) -> bool {
        self.mappings.contains_key(name)
    }

    /// Iterate over all mappings in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&LabelName, CellRef)> {
        self.mappings.iter().map(|(name, target)| (name, *target))
    }

    /// Number of defined labels
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell_ref(s: &str) -> CellRef {
        CellRef::parse(s).unwrap()
    }

    #[test]
    fn test_label_name_validation() {
        assert!(matches!(LabelName::new(""), Err(Error::EmptyLabelName)));
        assert_eq!(LabelName::new("label").unwrap().as_str(), "label");
    }

    #[test]
    fn test_label_name_is_case_sensitive() {
        assert_ne!(LabelName::new("Rate").unwrap(), LabelName::new("rate").unwrap());
        assert_eq!(LabelName::new("Rate").unwrap(), LabelName::new("Rate").unwrap());
    }

    #[test]
    fn test_mapping_equality() {
        let a = cell_ref("A1");
        let b = cell_ref("B7");

        let mapping = LabelMapping::new(LabelName::new("label").unwrap(), a);
        assert_eq!(
            mapping,
            LabelMapping::new(LabelName::new("label").unwrap(), a)
        );
        assert_ne!(
            mapping,
            LabelMapping::new(LabelName::new("different").unwrap(), a)
        );
        assert_ne!(mapping, LabelMapping::new(LabelName::new("label").unwrap(), b));

        // Kind changes the target's identity, so it changes the mapping too
        assert_ne!(
            mapping,
            LabelMapping::new(LabelName::new("label").unwrap(), cell_ref("$A$1"))
        );
    }

    #[test]
    fn test_mapping_with_target() {
        let mapping = LabelMapping::new(LabelName::new("Total").unwrap(), cell_ref("A1"));
        let moved = mapping.clone().with_target(cell_ref("B2"));
        assert_eq!(moved.label(), mapping.label());
        assert_eq!(moved.target(), cell_ref("B2"));
    }

    #[test]
    fn test_directory_define_and_resolve() {
        let mut directory = LabelDirectory::new();
        assert!(directory.is_empty());

        directory
            .define(LabelMapping::new(
                LabelName::new("TaxRate").unwrap(),
                cell_ref("$B$1"),
            ))
            .unwrap();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.resolve("TaxRate"), Some(cell_ref("$B$1")));
        assert!(directory.contains("TaxRate"));

        // Lookup is case-sensitive
        assert_eq!(directory.resolve("taxrate"), None);

        // Duplicate definitions are rejected
        let dup = directory.define(LabelMapping::new(
            LabelName::new("TaxRate").unwrap(),
            cell_ref("C3"),
        ));
        assert!(matches!(dup, Err(Error::DuplicateLabel(_))));
        assert_eq!(directory.resolve("TaxRate"), Some(cell_ref("$B$1")));
    }

    #[test]
    fn test_directory_define_or_update() {
        let mut directory = LabelDirectory::new();
        directory.define_or_update(LabelMapping::new(
            LabelName::new("Rate").unwrap(),
            cell_ref("A1"),
        ));
        directory.define_or_update(LabelMapping::new(
            LabelName::new("Rate").unwrap(),
            cell_ref("B2"),
        ));
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.resolve("Rate"), Some(cell_ref("B2")));
    }

    #[test]
    fn test_directory_remove() {
        let mut directory = LabelDirectory::new();
        directory
            .define(LabelMapping::new(
                LabelName::new("Rate").unwrap(),
                cell_ref("A1"),
            ))
            .unwrap();

        assert_eq!(directory.remove("Rate"), Some(cell_ref("A1")));
        assert_eq!(directory.remove("Rate"), None);
        assert!(directory.is_empty());
    }
}
