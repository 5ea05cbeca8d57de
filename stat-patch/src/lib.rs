//! Stat Patch Library
//!
//! A small, stateless library that renders replacement snippets for the
//! `EnhancedStatList.java` arrays that are missing their final five values.
//!
//! # Architecture
//!
//! - Holds the built-in table of 17 entries (old array tail, new values)
//! - Renders each entry through a block format (replacement, summary, JSON Lines)
//! - Streams blocks in table order into any `std::io::Write`
//!
//! The library does NOT:
//! - Open, parse or modify the target Java file
//! - Check that an old fragment actually occurs in the target, or occurs once
//!
//! Pasting the snippets is left to a human.
//!
//! # Example Usage
//!
//! ```
//! use stat_patch::{EntryTable, Generator, GeneratorConfig, OutputFormat};
//!
//! let table = EntryTable::builtin();
//! let generator = Generator::new(GeneratorConfig::new().with_format(OutputFormat::Summary));
//!
//! let mut out = Vec::new();
//! let blocks = generator.write_to(&table, &mut out).unwrap();
//! assert_eq!(blocks, 17);
//! ```

// Public modules
pub mod config;
pub mod formats;
pub mod generator;
pub mod table;
pub mod types;

// Re-export main types for convenience
pub use config::{GeneratorConfig, OutputFormat};
pub use generator::Generator;
pub use table::{EntryTable, BUILTIN_ENTRIES};
pub use types::{PatchError, ReplacementEntry, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Write the replacement patterns for the built-in table with default settings
pub fn generate<W: std::io::Write>(writer: &mut W) -> Result<usize> {
    Generator::default().write_to(&EntryTable::builtin(), writer)
}
