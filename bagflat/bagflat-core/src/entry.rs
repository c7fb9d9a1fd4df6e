//! Final per-struct definition entries.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// One entry of a final struct definition: the terminal type, the dotted
/// value path, and (for flagged composites) the validity path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalEntry {
    pub ty: String,
    pub value: String,
    pub valid: Option<String>,
}

impl FinalEntry {
    pub fn plain(ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            value: value.into(),
            valid: None,
        }
    }

    pub fn flagged(value: impl Into<String>, valid: impl Into<String>) -> Self {
        Self {
            ty: "flagged".to_string(),
            value: value.into(),
            valid: Some(valid.into()),
        }
    }
}

/// Leaf-path-keyed collection of [`FinalEntry`] for one struct.
///
/// Insertion is last-write-wins: a later entry under an existing path
/// replaces the earlier one, mirroring the shallow-merge semantics the
/// downstream persistence layer applies against previously written
/// definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FinalStructDict(BTreeMap<String, FinalEntry>);

impl FinalStructDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` under `path`, replacing any earlier entry at that path.
    pub fn insert(&mut self, path: impl Into<String>, entry: FinalEntry) {
        self.0.insert(path.into(), entry);
    }

    pub fn get(&self, path: &str) -> Option<&FinalEntry> {
        self.0.get(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FinalEntry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a FinalStructDict {
    type Item = (&'a String, &'a FinalEntry);
    type IntoIter = btree_map::Iter<'a, String, FinalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
