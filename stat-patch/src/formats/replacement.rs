//! Before/after replacement snippets
//!
//! The "With:" half keeps the old values, adds a trailing comma, an
//! indent-only spacer line and the appended values under their own comment.

use super::BlockFormat;
use crate::config::GeneratorConfig;
use crate::types::{ReplacementEntry, Result};

/// Default format: paste-ready "Replace:" / "With:" pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplacementFormat;

impl BlockFormat for ReplacementFormat {
    fn header(&self, config: &GeneratorConfig) -> String {
        format!("=== Replacement patterns for {} ===\n\n", config.target_file)
    }

    fn block(&self, entry: &ReplacementEntry, config: &GeneratorConfig) -> Result<String> {
        let body = config.body_pad();
        let closing = config.closing_pad();
        let existing = &config.existing_comment;
        let appended = &config.appended_comment;
        let old = &entry.old_fragment;
        let new = &entry.new_fragment;

        let mut block = String::new();
        block.push_str(&format!("// For {}:\n", entry.name));
        block.push_str("Replace:\n");
        block.push_str(&format!("{body}{existing}\n"));
        block.push_str(&format!("{body}{old}\n"));
        block.push_str(&format!("{closing}}};\n"));
        block.push_str("With:\n");
        block.push_str(&format!("{body}{existing}\n"));
        block.push_str(&format!("{body}{old},\n"));
        block.push_str(&format!("{body}\n"));
        block.push_str(&format!("{body}{appended}\n"));
        block.push_str(&format!("{body}{new}\n"));
        block.push_str(&format!("{closing}}};\n"));
        block.push('\n');
        Ok(block)
    }
}
