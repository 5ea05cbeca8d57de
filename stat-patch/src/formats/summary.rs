//! Compact "values to add" listing

use super::BlockFormat;
use crate::config::GeneratorConfig;
use crate::types::{ReplacementEntry, Result};

/// One `NAME (add): values` line per entry, framed by a short note
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFormat;

impl BlockFormat for SummaryFormat {
    fn header(&self, config: &GeneratorConfig) -> String {
        format!(
            "=== Missing Stats for Final 5 Elite Cars ===\n\
             Add these values to the respective arrays in {}:\n\n",
            config.target_file
        )
    }

    fn block(&self, entry: &ReplacementEntry, _config: &GeneratorConfig) -> Result<String> {
        Ok(format!("{} (add): {}\n", entry.name, entry.new_fragment))
    }

    fn footer(&self, _config: &GeneratorConfig) -> String {
        "\nThese values maintain the elite car theme with high performance across all categories.\n"
            .to_string()
    }
}
