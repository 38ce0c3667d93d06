//! Selection helpers — "empty selection means select-all" and bullet overrides.
//!
//! Selection is a pure membership test against the profile: unknown identifiers
//! select nothing and never raise. The profile's relative order always wins over
//! the order of the selection list.

use std::collections::{HashMap, HashSet};

use crate::models::profile::Identified;

/// Returns `items` filtered by `key` membership in `selected`, in original order.
/// An empty `selected` returns every item.
pub fn select_all_if_empty<'a, T, F>(items: &'a [T], selected: &[String], key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    if selected.is_empty() {
        return items.iter().collect();
    }

    let wanted: HashSet<&str> = selected.iter().map(String::as_str).collect();
    items
        .iter()
        .filter(|&item| wanted.contains(key(item)))
        .collect()
}

/// Id-keyed selection for experience, education and project entries.
/// Entries without an id are only reachable through select-all.
pub fn select_by_id<'a, T: Identified>(items: &'a [T], selected_ids: &[String]) -> Vec<&'a T> {
    select_all_if_empty(items, selected_ids, |item| item.id())
        .into_iter()
        .filter(|item| selected_ids.is_empty() || !item.id().is_empty())
        .collect()
}

/// Resolves the highlights to emit for one entry.
///
/// An override replaces the profile highlights in full. Entries without an id
/// can never be overridden.
pub fn resolve_highlights(
    entry_id: &str,
    highlights: &[String],
    overrides: &HashMap<String, Vec<String>>,
) -> Vec<String> {
    if !entry_id.is_empty() {
        if let Some(replacement) = overrides.get(entry_id) {
            return replacement.clone();
        }
    }
    highlights.to_vec()
}
