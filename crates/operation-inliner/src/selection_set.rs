use crate::arguments;
use graphql_parser::query::{Selection, TypeCondition};
use indexmap::{map::Entry, IndexMap};

/// Deduplicates a list of sibling selections so that no two entries share
/// a merge key, preserving first-occurrence order.
///
/// When a key recurs and either occurrence carries a nested selection set,
/// the recorded entry is replaced by one whose children are the recursive
/// merge of both child lists; a leaf merged with a set-bearing duplicate
/// adopts the set. The first occurrence's alias and arguments win.
pub(crate) fn merge<'a>(selections: Vec<Selection<'a, &'a str>>) -> Vec<Selection<'a, &'a str>> {
    let mut merged: IndexMap<String, Selection<'a, &'a str>> = IndexMap::with_capacity(selections.len());

    for selection in selections {
        match merged.entry(merge_key(&selection)) {
            Entry::Vacant(entry) => {
                entry.insert(selection);
            }
            Entry::Occupied(mut entry) => merge_into(entry.get_mut(), selection),
        }
    }

    merged.into_values().collect()
}

fn merge_key<'a>(selection: &Selection<'a, &'a str>) -> String {
    match selection {
        Selection::Field(field) => {
            let mut key = field.alias.unwrap_or(field.name).to_string();
            key.push_str(&arguments::canonical_key(&field.arguments));
            key
        }
        Selection::InlineFragment(fragment) => {
            let type_condition = match &fragment.type_condition {
                Some(TypeCondition::On(name)) => name,
                None => "",
            };

            format!("inline:{type_condition}")
        }
        Selection::FragmentSpread(spread) => format!("...{}", spread.fragment_name),
    }
}

fn merge_into<'a>(existing: &mut Selection<'a, &'a str>, incoming: Selection<'a, &'a str>) {
    match (existing, incoming) {
        (Selection::Field(existing), Selection::Field(incoming)) => {
            merge_children(&mut existing.selection_set.items, incoming.selection_set.items);
        }
        (Selection::InlineFragment(existing), Selection::InlineFragment(incoming)) => {
            merge_children(&mut existing.selection_set.items, incoming.selection_set.items);
        }
        // Identical spreads collapse into the first occurrence.
        _ => (),
    }
}

fn merge_children<'a>(existing: &mut Vec<Selection<'a, &'a str>>, incoming: Vec<Selection<'a, &'a str>>) {
    if existing.is_empty() && incoming.is_empty() {
        return;
    }

    let mut combined = std::mem::take(existing);
    combined.extend(incoming);

    *existing = merge(combined);
}
