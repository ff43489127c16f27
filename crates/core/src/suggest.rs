//! Suggestion seed for the query prompt.
//!
//! Counts the whitespace-separated tokens appearing in retained names
//! and keeps the ones common and long enough to be worth offering. The
//! list is ranked by (count, token) first so the cut is stable, then
//! re-sorted alphabetically for display, with one empty entry so the
//! prompt can cycle back to a blank query.

use std::collections::HashMap;

use crate::index::NamedIndex;

/// Tokens shorter than this are too generic to suggest.
const MIN_TOKEN_LEN: usize = 5;

/// Tokens rarer than this are too obscure to suggest.
const MIN_TOKEN_COUNT: usize = 8;

/// Build the suggestion list for `index`.
pub fn suggestions(index: &NamedIndex) -> Vec<String> {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	for entry in index.entries() {
		for part in entry.name.split(' ') {
			*counts.entry(part).or_insert(0) += 1;
		}
	}

	let mut ranked: Vec<(usize, &str)> = counts
		.into_iter()
		.filter(|&(part, count)| part.len() >= MIN_TOKEN_LEN && count >= MIN_TOKEN_COUNT)
		.map(|(part, count)| (count, part))
		.collect();
	ranked.sort_unstable();

	let mut names: Vec<String> = ranked
		.into_iter()
		.map(|(_, part)| part.to_string())
		.collect();
	names.push(String::new());
	names.sort_unstable();
	names
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::index::{NamedEntry, NamedIndex};

	fn index_with_names(names: &[&str]) -> NamedIndex {
		let entries = names
			.iter()
			.enumerate()
			.map(|(offset, name)| NamedEntry {
				code_point: offset as u32,
				name: (*name).to_owned(),
			})
			.collect();
		NamedIndex::from_entries(entries)
	}

	#[test]
	fn short_and_rare_tokens_are_dropped() {
		let names: Vec<String> = (0..10).map(|n| format!("GREEK THING {n}")).collect();
		let refs: Vec<&str> = names.iter().map(String::as_str).collect();
		let seeds = suggestions(&index_with_names(&refs));

		// "GREEK" meets both thresholds, "THING" too; the digits and
		// short tokens never qualify.
		assert!(seeds.contains(&"GREEK".to_string()));
		assert!(seeds.contains(&"THING".to_string()));
		assert!(!seeds.iter().any(|seed| seed.len() == 1));
	}

	#[test]
	fn tokens_below_count_threshold_are_dropped() {
		let names: Vec<String> = (0..7).map(|n| format!("SPARSE TOKEN {n}")).collect();
		let refs: Vec<&str> = names.iter().map(String::as_str).collect();
		let seeds = suggestions(&index_with_names(&refs));
		assert_eq!(seeds, vec![String::new()], "7 occurrences is below the cut");
	}

	#[test]
	fn output_is_alphabetical_with_one_empty_seed() {
		let names: Vec<String> = (0..9)
			.map(|n| format!("ZEBRA ALPHA MIDDLE {n}"))
			.collect();
		let refs: Vec<&str> = names.iter().map(String::as_str).collect();
		let seeds = suggestions(&index_with_names(&refs));

		assert_eq!(seeds.first().map(String::as_str), Some(""));
		let sorted = seeds.windows(2).all(|pair| pair[0] <= pair[1]);
		assert!(sorted, "display order must be alphabetical");
		assert_eq!(seeds.iter().filter(|seed| seed.is_empty()).count(), 1);
		assert_eq!(
			seeds,
			vec![
				String::new(),
				"ALPHA".into(),
				"MIDDLE".into(),
				"ZEBRA".into()
			]
		);
	}

	#[test]
	fn full_index_produces_common_unicode_tokens() {
		let seeds = suggestions(&NamedIndex::build());
		assert!(seeds.contains(&"LATIN".to_string()));
		assert!(seeds.contains(&"LETTER".to_string()));
		assert!(seeds.iter().all(|seed| {
			seed.is_empty() || (seed.len() >= MIN_TOKEN_LEN)
		}));
	}
}
