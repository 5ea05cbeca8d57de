//! Generator configuration types
//!
//! Every field has a default, and the defaults reproduce the replacement
//! patterns for `EnhancedStatList.java` byte for byte. The application layer
//! may override them from a config file or the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for generated blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Before/after snippets ready to paste over the array tails
    #[default]
    Replacement,
    /// One `NAME (add): values` line per entry
    Summary,
    /// JSON Lines, one object per entry
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Replacement => write!(f, "replacement"),
            OutputFormat::Summary => write!(f, "summary"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replacement" => Ok(OutputFormat::Replacement),
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Configuration for the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Output format
    pub format: OutputFormat,

    /// File the snippets are meant for (shown in headers)
    pub target_file: String,

    /// Comment line preceding the existing values
    pub existing_comment: String,

    /// Comment line preceding the appended values
    pub appended_comment: String,

    /// Spaces before comment and value lines
    pub body_indent: usize,

    /// Spaces before the closing `};`
    pub closing_indent: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            target_file: "EnhancedStatList.java".to_string(),
            existing_comment: "// Professional racers".to_string(),
            appended_comment: "// Final 5 elite cars".to_string(),
            body_indent: 8,
            closing_indent: 4,
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method: set the target file name
    pub fn with_target_file(mut self, target_file: impl Into<String>) -> Self {
        self.target_file = target_file.into();
        self
    }

    /// Builder method: set both section comments
    pub fn with_comments(
        mut self,
        existing_comment: impl Into<String>,
        appended_comment: impl Into<String>,
    ) -> Self {
        self.existing_comment = existing_comment.into();
        self.appended_comment = appended_comment.into();
        self
    }

    /// Builder method: set body and closing indentation
    pub fn with_indent(mut self, body_indent: usize, closing_indent: usize) -> Self {
        self.body_indent = body_indent;
        self.closing_indent = closing_indent;
        self
    }

    pub(crate) fn body_pad(&self) -> String {
        " ".repeat(self.body_indent)
    }

    pub(crate) fn closing_pad(&self) -> String {
        " ".repeat(self.closing_indent)
    }
}
