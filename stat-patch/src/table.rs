//! Entry tables
//!
//! The built-in table lists the 17 `EnhancedStatList` arrays that are missing
//! the values for the final five elite cars. Each `old_fragment` is the
//! "Professional racers" row as it currently ends in the target file.

use crate::types::{PatchError, ReplacementEntry, Result};
use std::collections::HashSet;

/// Built-in entries as (name, old fragment, new fragment), in emission order
pub const BUILTIN_ENTRIES: [(&str, &str, &str); 17] = [
    ("ENHANCED_BOUNCE", "1.08F, 1.12F, 1.06F, 1.1F", "1.05F, 1.0F, 0.95F, 1.08F, 1.02F"),
    ("ENHANCED_SIMAG", "0.87F, 0.89F, 0.85F, 0.88F", "0.86F, 0.84F, 0.82F, 0.88F, 0.85F"),
    ("ENHANCED_MOMENT", "1.65F, 1.7F, 1.6F, 1.68F", "1.6F, 1.8F, 2.0F, 1.7F, 1.75F"),
    ("ENHANCED_COMPRAD", "0.52F, 0.55F, 0.5F, 0.53F", "0.48F, 0.45F, 0.42F, 0.50F, 0.47F"),
    ("ENHANCED_PUSH", "3, 3, 3, 3", "2, 3, 4, 2, 3"),
    ("ENHANCED_REVPUSH", "2, 2, 2, 2", "2, 2, 1, 2, 2"),
    ("ENHANCED_LIFT", "22, 25, 20, 23", "18, 20, 25, 19, 22"),
    ("ENHANCED_REVLIFT", "8, 6, 10, 7", "6, 5, 4, 7, 6"),
    ("ENHANCED_POWERLOSS", "3200000, 3400000, 3000000, 3300000", "3100000, 2900000, 2700000, 3300000, 3000000"),
    ("ENHANCED_FLIPY", "-68, -72, -65, -70", "-66, -64, -62, -69, -67"),
    ("ENHANCED_MSQUASH", "6, 7, 5, 6", "4, 3, 2, 5, 4"),
    ("ENHANCED_CLRAD", "4200, 4500, 4000, 4300", "3800, 3600, 3400, 4000, 3700"),
    ("ENHANCED_DAMMULT", "0.58F, 0.55F, 0.62F, 0.57F", "0.60F, 0.65F, 0.70F, 0.58F, 0.62F"),
    ("ENHANCED_MAXMAG", "14000, 15000, 13000, 14500", "13500, 12500, 11500, 14000, 13000"),
    ("ENHANCED_DISHANDLE", "0.72F, 0.75F, 0.7F, 0.73F", "0.71F, 0.69F, 0.67F, 0.74F, 0.72F"),
    ("ENHANCED_OUTDAM", "0.7F, 0.75F, 0.68F, 0.72F", "0.69F, 0.65F, 0.62F, 0.73F, 0.70F"),
    ("ENHANCED_ENGINE", "3, 3, 3, 3", "3, 4, 4, 3, 3"),
];

/// An ordered, immutable sequence of replacement entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTable {
    entries: Vec<ReplacementEntry>,
}

impl EntryTable {
    /// The hardcoded table of 17 entries
    ///
    /// Name uniqueness is maintained by hand here and is not checked at runtime.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(name, old, new)| ReplacementEntry::new(*name, *old, *new))
            .collect();
        Self { entries }
    }

    /// Build a custom table, rejecting unnamed and duplicate entries
    pub fn from_entries(entries: Vec<ReplacementEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(PatchError::InvalidEntry(format!(
                    "entry with old fragment {:?} has an empty name",
                    entry.old_fragment
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(PatchError::DuplicateEntry(entry.name.clone()));
            }
        }

        log::debug!("Built custom entry table with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Keep only the named entries, preserving table order
    pub fn filtered<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        for name in names {
            if self.get(name.as_ref()).is_none() {
                return Err(PatchError::EntryNotFound(name.as_ref().to_string()));
            }
        }

        let entries = self
            .entries
            .iter()
            .filter(|entry| names.iter().any(|name| name.as_ref() == entry.name))
            .cloned()
            .collect();
        Ok(Self { entries })
    }

    /// Look up an entry by array name
    pub fn get(&self, name: &str) -> Option<&ReplacementEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReplacementEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a EntryTable {
    type Item = &'a ReplacementEntry;
    type IntoIter = std::slice::Iter<'a, ReplacementEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
