use crate::{selection_set, Error};
use graphql_parser::query::{
    Definition, Document, FragmentDefinition, OperationDefinition, Selection, SelectionSet,
};
use std::collections::HashMap;

/// Read-only lookup table from fragment name to its definition, built once
/// per document.
pub(crate) type FragmentMap<'a> = HashMap<&'a str, FragmentDefinition<'a, &'a str>>;

/// Splits a document into its fragment map and its operations.
///
/// A duplicate fragment name is rejected here rather than resolved by
/// last-write-wins, so every later lookup is unambiguous.
pub(crate) fn partition<'a>(
    document: Document<'a, &'a str>,
) -> Result<(FragmentMap<'a>, Vec<OperationDefinition<'a, &'a str>>), Error> {
    let mut fragments = FragmentMap::new();
    let mut operations = Vec::new();

    for definition in document.definitions {
        match definition {
            Definition::Operation(operation) => operations.push(operation),
            Definition::Fragment(fragment) => {
                let name = fragment.name;

                if fragments.insert(name, fragment).is_some() {
                    return Err(Error::DuplicateFragment(name.to_string()));
                }
            }
        }
    }

    Ok((fragments, operations))
}

/// Recursively expands one selection set: spreads are replaced by their
/// target's selections spliced in place, fields and inline fragments keep
/// their position with their children expanded, and the collected list is
/// merged before being handed back up.
///
/// `path` holds the fragment names on the current expansion path; a name
/// recurring there means the document spreads a fragment into itself.
pub(crate) fn expand<'a>(
    selection_set: &SelectionSet<'a, &'a str>,
    fragments: &FragmentMap<'a>,
    path: &mut Vec<&'a str>,
) -> Result<Vec<Selection<'a, &'a str>>, Error> {
    let mut expanded = Vec::with_capacity(selection_set.items.len());

    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => {
                let items = expand(&field.selection_set, fragments, path)?;

                let mut field = field.clone();
                field.selection_set.items = items;

                expanded.push(Selection::Field(field));
            }
            Selection::InlineFragment(fragment) => {
                let items = expand(&fragment.selection_set, fragments, path)?;

                let mut fragment = fragment.clone();
                fragment.selection_set.items = items;

                expanded.push(Selection::InlineFragment(fragment));
            }
            Selection::FragmentSpread(spread) => {
                let Some(fragment) = fragments.get(spread.fragment_name) else {
                    return Err(Error::UnresolvedFragment(spread.fragment_name.to_string()));
                };

                if path.contains(&spread.fragment_name) {
                    return Err(Error::CyclicFragment(spread.fragment_name.to_string()));
                }

                path.push(spread.fragment_name);
                let items = expand(&fragment.selection_set, fragments, path)?;
                path.pop();

                expanded.extend(items);
            }
        }
    }

    Ok(selection_set::merge(expanded))
}
