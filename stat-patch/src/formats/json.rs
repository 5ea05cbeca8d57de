//! JSON Lines output

use super::BlockFormat;
use crate::config::GeneratorConfig;
use crate::types::{ReplacementEntry, Result};

/// One JSON object per entry, newline terminated, no header or footer
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesFormat;

impl BlockFormat for JsonLinesFormat {
    fn header(&self, _config: &GeneratorConfig) -> String {
        String::new()
    }

    fn block(&self, entry: &ReplacementEntry, _config: &GeneratorConfig) -> Result<String> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line() {
        let entry = ReplacementEntry::new("ENHANCED_FLIPY", "-68, -72", "-66, -64");
        let line = JsonLinesFormat.block(&entry, &GeneratorConfig::new()).unwrap();

        assert!(line.ends_with('\n'));
        let parsed: ReplacementEntry = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_json_key_names() {
        let entry = ReplacementEntry::new("A", "1", "2");
        let line = JsonLinesFormat.block(&entry, &GeneratorConfig::new()).unwrap();
        assert_eq!(line, "{\"name\":\"A\",\"old_fragment\":\"1\",\"new_fragment\":\"2\"}\n");
    }
}
