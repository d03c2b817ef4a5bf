//! # Document splitter
//!
//! Cuts a raw text containing any number of query and fragment
//! definitions into discrete pieces, then groups the pieces into
//! destination files by naming convention. This is achieved by doing the
//! following steps:
//!
//! - Scan the text for the `query` and `fragment` keywords, read the
//!   definition name behind each, and cut out the exact substring through
//!   the brace-balanced body
//! - Derive a destination filename per definition: queries drop a
//!   trailing `Query` from their name, fragments keep the part of their
//!   name before the first underscore
//! - Order files alphabetically, order definitions within a file with
//!   queries first, and render each file's definitions joined by blank
//!   lines
//!
//! The scanner works on the raw text on purpose: the input here is
//! editor-buffer content that may hold several definitions and arbitrary
//! prose around them, which a document parser would reject wholesale.

#![deny(missing_docs)]

mod group;
mod scan;

#[cfg(test)]
mod tests;

pub use group::{group, MergedFile, FILE_EXTENSION};
pub use scan::split;

/// The two definition kinds the scanner recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinitionKind {
    /// A `query` definition.
    Query,
    /// A `fragment` definition.
    Fragment,
}

impl DefinitionKind {
    /// The source keyword introducing definitions of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            DefinitionKind::Query => "query",
            DefinitionKind::Fragment => "fragment",
        }
    }
}

/// One definition cut out of the raw input, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDefinition<'a> {
    /// Whether the definition is a query or a fragment.
    pub kind: DefinitionKind,
    /// The name following the keyword.
    pub name: &'a str,
    /// The exact source substring, keyword through closing brace.
    pub content: &'a str,
}

/// Failures of the scanner.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// A keyword is not followed by an identifier.
    #[error("expected a name after `{keyword}` at offset {offset}")]
    MalformedDefinition {
        /// The keyword missing its name.
        keyword: &'static str,
        /// Byte offset of the keyword in the input.
        offset: usize,
    },
    /// The input ended while a definition's body was still open.
    #[error("definition `{name}` has an unterminated body")]
    UnmatchedBrace {
        /// Name of the definition being scanned.
        name: String,
    },
}
