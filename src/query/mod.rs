//! Query string configuration.
//!
//! Parses strings like `?width=1200&row_height=300&gap=8&last_row=left`
//! into [`Instructions`], which resolve to a [`JustifyConfig`](crate::JustifyConfig).
//! Views that embed a grid can pass their settings this way without
//! building the config by hand.
//!
//! # Example
//!
//! ```
//! use zenjustify::query;
//!
//! let result = query::parse("preset=projects&viewport=1440&gap=12");
//! assert!(result.warnings.is_empty());
//!
//! let config = result.instructions.to_config(1280.0).unwrap();
//! assert_eq!(config.container_width, 1280.0);
//! assert_eq!(config.target_row_height, 440.0);
//! assert_eq!(config.gap, 12.0);
//! ```

pub mod instructions;
mod parse;

pub use instructions::Instructions;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed layout instructions.
    pub instructions: Instructions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: &'static str, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (instructions, warnings) = parse::parse_query(query);
    ParseResult {
        instructions,
        warnings,
    }
}
