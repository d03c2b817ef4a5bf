//! # Operation inliner
//!
//! A library to rewrite an executable GraphQL document so that every
//! operation is self-contained. This is achieved by doing the following
//! steps:
//!
//! - Build a lookup table of the document's fragment definitions
//! - Replace every fragment spread with the selections of its target
//!   fragment, recursively, splicing them in at the spread's position
//! - Merge sibling selections requesting the same data, at every nesting
//!   level, keeping the position, alias and arguments of the first
//!   occurrence
//! - Drop the fragment definitions, leaving only operations, and render
//!   the result with the parser's printer

#![deny(missing_docs)]

mod arguments;
mod fragments;
mod selection_set;


pub use graphql_parser::query::Document;

use graphql_parser::query::{Definition, OperationDefinition, SelectionSet};

/// Failures of the inlining transformation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a valid executable document. Carries the parser's
    /// message verbatim.
    #[error("{0}")]
    Syntax(String),
    /// A spread references a fragment the document does not define.
    #[error("unknown fragment `{0}`")]
    UnresolvedFragment(String),
    /// Two fragment definitions share a name.
    #[error("fragment `{0}` is defined more than once")]
    DuplicateFragment(String),
    /// A fragment spreads itself, directly or through other fragments.
    #[error("fragment `{0}` spreads itself")]
    CyclicFragment(String),
}

/// With the given input, returns an equivalent document in which no
/// fragment spread and no fragment definition survives.
///
/// Duplicate sibling selections are merged along the way, so inlining an
/// already spread-free document still canonicalizes it.
pub fn inline(source_text: &str) -> Result<String, Error> {
    let document =
        graphql_parser::parse_query::<&str>(source_text).map_err(|err| Error::Syntax(err.to_string()))?;

    let document = inline_document(document)?;

    Ok(document.to_string())
}

/// The AST-level transformation behind [`inline`], for callers already
/// holding a parsed document.
pub fn inline_document<'a>(document: Document<'a, &'a str>) -> Result<Document<'a, &'a str>, Error> {
    let (fragments, operations) = fragments::partition(document)?;

    let mut definitions = Vec::with_capacity(operations.len());

    for mut operation in operations {
        let selection_set = selection_set_mut(&mut operation);
        let items = fragments::expand(selection_set, &fragments, &mut Vec::new())?;
        selection_set.items = items;

        definitions.push(Definition::Operation(operation));
    }

    Ok(Document { definitions })
}

fn selection_set_mut<'a, 'b>(
    operation: &'b mut OperationDefinition<'a, &'a str>,
) -> &'b mut SelectionSet<'a, &'a str> {
    match operation {
        OperationDefinition::SelectionSet(selection_set) => selection_set,
        OperationDefinition::Query(query) => &mut query.selection_set,
        OperationDefinition::Mutation(mutation) => &mut mutation.selection_set,
        OperationDefinition::Subscription(subscription) => &mut subscription.selection_set,
    }
}
