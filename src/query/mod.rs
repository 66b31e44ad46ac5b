//! Query-string configuration for a scaling stack and its children's rules.
//!
//! Parses strings like `?align=top-trailing&small=80x80&big=160x160&size.1=fraction(0.25,0.25)`
//! into [`Instructions`], which convert to a [`ScalingStack`](crate::ScalingStack),
//! a [`ProposedSize`](crate::ProposedSize) and per-child rules.
//!
//! # Example
//!
//! ```
//! use zenstack::{query, Alignment, Size, SizingRule};
//!
//! let result = query::parse("align=toptrailing&small=80x80&big=160x160&size=refs(16x26,60x60)");
//! assert!(result.warnings.is_empty());
//!
//! let stack = result.instructions.to_stack();
//! assert_eq!(stack.alignment, Alignment::TopTrailing);
//! assert_eq!(stack.references.big, Size::new(160.0, 160.0));
//!
//! let children = result.instructions.to_children(["nose"]);
//! assert_eq!(
//!     children[0].size,
//!     SizingRule::references(Size::new(16.0, 26.0), Size::new(60.0, 60.0))
//! );
//! ```
//!
//! # Keys
//!
//! | key | value |
//! |-----|-------|
//! | `align`, `alignment` | alignment name (`topleading`, `bottom-right`, …) |
//! | `small`, `big` | reference container size, `WxH` or `W,H` |
//! | `w`, `width`, `h`, `height` | proposed container dimension |
//! | `size`, `size.N` (alias `sizing`) | sizing rule for child 0 / child N |
//! | `offset`, `offset.N` | offset rule for child 0 / child N |
//!
//! Rules: `unspecified`, `fraction(x,y)`, `refs(WxH,WxH)`, `slope(m,b)`,
//! `fixed(WxH)`. Custom functions cannot be expressed in a query.
//!
//! Malformed input never fails the parse: it produces a [`ParseWarning`]
//! and the affected setting keeps its default.

mod instructions;
mod parse;

pub use instructions::{ChildRules, Instructions};

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed instructions.
    pub instructions: Instructions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { key, value } => {
                write!(f, "duplicate key `{key}` (using `{value}`)")
            }
            Self::KeyNotRecognized { key, value } => {
                write!(f, "unrecognized key `{key}={value}`")
            }
            Self::ValueInvalid { key, value, reason } => {
                write!(f, "invalid value `{value}` for `{key}`: {reason}")
            }
        }
    }
}

impl core::error::Error for ParseWarning {}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (instructions, warnings) = parse::parse_query(query);
    #[cfg(feature = "tracing")]
    for warning in &warnings {
        tracing::debug!(%warning, "query parse warning");
    }
    ParseResult {
        instructions,
        warnings,
    }
}
