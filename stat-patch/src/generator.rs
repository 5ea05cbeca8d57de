//! Main generator API
//!
//! The Generator walks an entry table in order and renders each entry with the
//! configured format. Blocks are produced lazily; nothing is buffered beyond
//! the block currently being written.

use crate::config::GeneratorConfig;
use crate::formats::{self, BlockFormat};
use crate::table::EntryTable;
use crate::types::{ReplacementEntry, Result};
use std::io::Write;

/// The main generator struct - entry point for all rendering
pub struct Generator {
    config: GeneratorConfig,
    format: Box<dyn BlockFormat>,
}

impl Generator {
    /// Create a new generator for the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        let format = formats::for_format(config.format);
        Self { config, format }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Document header, emitted once before the first block
    pub fn header(&self) -> String {
        self.format.header(&self.config)
    }

    /// Document footer, emitted once after the last block
    pub fn footer(&self) -> String {
        self.format.footer(&self.config)
    }

    /// Render a single entry
    pub fn block(&self, entry: &ReplacementEntry) -> Result<String> {
        self.format.block(entry, &self.config)
    }

    /// Lazily render every entry of `table`, in table order
    ///
    /// # Example
    /// ```
    /// use stat_patch::{EntryTable, Generator};
    ///
    /// let generator = Generator::default();
    /// let table = EntryTable::builtin();
    /// let first = generator.blocks(&table).next().unwrap().unwrap();
    /// assert!(first.starts_with("// For ENHANCED_BOUNCE:"));
    /// ```
    pub fn blocks<'a>(
        &'a self,
        table: &'a EntryTable,
    ) -> impl Iterator<Item = Result<String>> + 'a {
        table.iter().map(move |entry| {
            log::trace!("Rendering block for {}", entry);
            self.block(entry)
        })
    }

    /// Render header, all blocks and footer into one string
    pub fn render(&self, table: &EntryTable) -> Result<String> {
        let mut output = self.header();
        for block in self.blocks(table) {
            output.push_str(&block?);
        }
        output.push_str(&self.footer());
        Ok(output)
    }

    /// Stream header, blocks and footer into `writer`
    ///
    /// Returns the number of blocks written. Write failures propagate as
    /// `PatchError::Io` and stop the run.
    pub fn write_to<W: Write>(&self, table: &EntryTable, writer: &mut W) -> Result<usize> {
        log::debug!(
            "Generating {} blocks ({} format) for {}",
            table.len(),
            self.config.format,
            self.config.target_file
        );

        writer.write_all(self.header().as_bytes())?;

        let mut written = 0;
        for block in self.blocks(table) {
            writer.write_all(block?.as_bytes())?;
            written += 1;
        }

        writer.write_all(self.footer().as_bytes())?;
        writer.flush()?;

        log::debug!("Wrote {} blocks", written);
        Ok(written)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_generator_creation() {
        let generator = Generator::default();
        assert_eq!(generator.config().format, OutputFormat::Replacement);
        assert_eq!(
            generator.header(),
            "=== Replacement patterns for EnhancedStatList.java ===\n\n"
        );
    }

    #[test]
    fn test_blocks_follow_table_order() {
        let generator = Generator::default();
        let table = EntryTable::builtin();

        let blocks: Vec<String> = generator.blocks(&table).collect::<Result<_>>().unwrap();
        assert_eq!(blocks.len(), 17);
        for (block, entry) in blocks.iter().zip(table.iter()) {
            let header_line = format!("// For {}:", entry.name);
            assert!(block.starts_with(&header_line));
        }
    }

    #[test]
    fn test_write_to_matches_render() {
        let generator = Generator::default();
        let table = EntryTable::builtin();

        let mut buffer = Vec::new();
        let written = generator.write_to(&table, &mut buffer).unwrap();

        assert_eq!(written, 17);
        assert_eq!(String::from_utf8(buffer).unwrap(), generator.render(&table).unwrap());
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        let generator = Generator::default();
        let table = EntryTable::from_entries(Vec::new()).unwrap();

        assert_eq!(generator.render(&table).unwrap(), generator.header());
    }

    #[test]
    fn test_write_error_propagates() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let generator = Generator::default();
        let result = generator.write_to(&EntryTable::builtin(), &mut FailingWriter);
        assert!(matches!(result, Err(crate::types::PatchError::Io(_))));
    }
}
