//! Output formats (replacement, summary, JSON Lines)
//!
//! Each format renders an optional document header, one block per entry and
//! an optional footer. The generator drives them; formats never do I/O.

use crate::config::{GeneratorConfig, OutputFormat};
use crate::types::{ReplacementEntry, Result};

pub mod json;
pub mod replacement;
pub mod summary;

// Re-export format types
pub use json::JsonLinesFormat;
pub use replacement::ReplacementFormat;
pub use summary::SummaryFormat;

/// Common trait for all block formats
pub trait BlockFormat {
    /// Text emitted once before the first block
    fn header(&self, config: &GeneratorConfig) -> String;

    /// Text for a single entry
    fn block(&self, entry: &ReplacementEntry, config: &GeneratorConfig) -> Result<String>;

    /// Text emitted once after the last block
    fn footer(&self, _config: &GeneratorConfig) -> String {
        String::new()
    }
}

/// Select the format implementation for a configured output format
pub fn for_format(format: OutputFormat) -> Box<dyn BlockFormat> {
    match format {
        OutputFormat::Replacement => Box::new(ReplacementFormat),
        OutputFormat::Summary => Box::new(SummaryFormat),
        OutputFormat::Json => Box::new(JsonLinesFormat),
    }
}
