use crate::{DefinitionKind, RawDefinition};
use std::{cmp::Ordering, collections::BTreeMap};

/// Extension appended to every destination filename.
pub const FILE_EXTENSION: &str = ".graphql";

/// A destination file with its merged definitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedFile {
    /// Destination filename, unique within the returned list.
    pub filename: String,
    /// The definitions assigned to the file, blank-line separated and
    /// newline-terminated.
    pub content: String,
}

/// Assigns each definition a destination file by naming convention and
/// merges the files deterministically.
///
/// Files come out in ordinal filename order. Within a file, queries
/// precede fragments, and definitions of the same kind are ordered by
/// ordinal comparison of their content — a content-derived tiebreak, not
/// insertion order.
pub fn group(definitions: &[RawDefinition<'_>]) -> Vec<MergedFile> {
    let mut files: BTreeMap<String, Vec<&RawDefinition<'_>>> = BTreeMap::new();

    for definition in definitions {
        files.entry(filename(definition)).or_default().push(definition);
    }

    files
        .into_iter()
        .map(|(filename, mut entries)| {
            entries.sort_by(|a, b| match (a.kind, b.kind) {
                (DefinitionKind::Query, DefinitionKind::Fragment) => Ordering::Less,
                (DefinitionKind::Fragment, DefinitionKind::Query) => Ordering::Greater,
                (DefinitionKind::Query, DefinitionKind::Query)
                | (DefinitionKind::Fragment, DefinitionKind::Fragment) => a.content.cmp(b.content),
            });

            let content = entries
                .into_iter()
                .map(|entry| wrap(entry.content))
                .collect::<Vec<_>>()
                .join("\n");

            MergedFile { filename, content }
        })
        .collect()
}

/// Queries drop one trailing `Query` from their name; fragments keep the
/// part of their name before the first underscore. Case is preserved.
fn filename(definition: &RawDefinition<'_>) -> String {
    let stem = match definition.kind {
        DefinitionKind::Query => definition
            .name
            .strip_suffix("Query")
            .unwrap_or(definition.name),
        DefinitionKind::Fragment => definition.name.split('_').next().unwrap_or(definition.name),
    };

    format!("{stem}{FILE_EXTENSION}")
}

fn wrap(content: &str) -> String {
    format!("{content}\n")
}
