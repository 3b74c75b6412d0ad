//! Menu groupings over walker output.
//!
//! Two independent partitions of the same entry list; neither mutates
//! it, and both keep each bucket in the entries' relative (sorted) order.

use std::collections::BTreeMap;

use crate::entry::Entry;

/// Entries bucketed under ascending string keys.
pub type Group<'a> = BTreeMap<String, Vec<&'a Entry>>;

/// Group entries by their kind's display name.
pub fn group_by_kind(entries: &[Entry]) -> Group<'_> {
	let mut groups = Group::new();
	for entry in entries {
		groups
			.entry(entry.kind.to_string())
			.or_default()
			.push(entry);
	}
	groups
}

/// Group entries by the first hierarchy level beneath the traversal root.
///
/// `path[0]` is the root itself, so the key is `path[1]` where there is
/// one; the root's own entry falls back to its own name.
pub fn group_by_first_segment(entries: &[Entry]) -> Group<'_> {
	let mut groups = Group::new();
	for entry in entries {
		let key = if entry.path.len() > 1 {
			&entry.path[1]
		} else {
			&entry.path[0]
		};
		groups.entry(key.clone()).or_default().push(entry);
	}
	groups
}
