//! Core types for the stat patch generator
//!
//! This module defines the record the generator consumes and the error type
//! shared by the whole library. Entries are plain immutable data - the
//! generator never changes them and never checks them against a target file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, PatchError>;

/// One named pair of array bodies destined for manual text substitution
///
/// `old_fragment` is the tail of an existing array literal as it appears in the
/// target file; `new_fragment` holds the elements to append after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplacementEntry {
    /// Name of the targeted array (e.g. `ENHANCED_BOUNCE`)
    pub name: String,
    /// Existing partial array body, reproduced verbatim
    pub old_fragment: String,
    /// Elements to append after the existing body
    pub new_fragment: String,
}

impl ReplacementEntry {
    /// Create a new entry
    pub fn new(
        name: impl Into<String>,
        old_fragment: impl Into<String>,
        new_fragment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            old_fragment: old_fragment.into(),
            new_fragment: new_fragment.into(),
        }
    }

    /// Number of comma-separated elements in the new fragment
    pub fn new_element_count(&self) -> usize {
        count_elements(&self.new_fragment)
    }

    /// Number of comma-separated elements in the old fragment
    pub fn old_element_count(&self) -> usize {
        count_elements(&self.old_fragment)
    }
}

impl fmt::Display for ReplacementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.name, self.new_element_count())
    }
}

fn count_elements(fragment: &str) -> usize {
    fragment
        .split(',')
        .filter(|element| !element.trim().is_empty())
        .count()
}

/// Errors that can occur while building tables or writing output
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Duplicate entry name: {0}")]
    DuplicateEntry(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PatchError {
    fn from(err: serde_json::Error) -> Self {
        PatchError::Serialization(err.to_string())
    }
}
