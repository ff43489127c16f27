//! The filterable named code-point index.
//!
//! [`NamedIndex::build`] scans the Basic Multilingual Plane once at
//! startup and keeps every code point whose name survives the exclusion
//! policy. [`NamedIndex::filter`] re-derives the visible subset for a
//! query; it returns positions into the entry list so callers can keep
//! one immutable dataset and cheap filtered views, the same shape the
//! results table uses for its row buffers.

use serde::Serialize;

use crate::properties::{self, BMP_LEN};

/// One retained code point with its canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedEntry {
	pub code_point: u32,
	pub name: String,
}

/// Ordered, immutable index of interesting named code points.
#[derive(Debug, Default, Clone)]
pub struct NamedIndex {
	entries: Vec<NamedEntry>,
}

impl NamedIndex {
	/// Scan `0..BMP_LEN` ascending and keep every named, non-excluded
	/// code point. Entry order equals code-point order by construction.
	pub fn build() -> Self {
		let mut entries = Vec::new();
		for code_point in 0..BMP_LEN {
			let Some(name) = properties::name(code_point) else {
				continue;
			};
			if is_excluded(&name) {
				continue;
			}
			entries.push(NamedEntry { code_point, name });
		}
		Self { entries }
	}

	/// Build an index from pre-computed entries. The caller is expected
	/// to pass entries in ascending code-point order.
	pub fn from_entries(entries: Vec<NamedEntry>) -> Self {
		Self { entries }
	}

	pub fn entries(&self) -> &[NamedEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, position: usize) -> Option<&NamedEntry> {
		self.entries.get(position)
	}

	/// Derive the filtered view for `query`.
	///
	/// A whitespace-only query is the identity. Otherwise the query is
	/// upper-cased and split on whitespace runs; an entry is kept iff
	/// every token is a substring of its upper-cased name. The returned
	/// positions preserve index order, and the whole scan is recomputed
	/// on every call so repeated queries are deterministic.
	pub fn filter(&self, query: &str) -> Vec<usize> {
		let trimmed = query.trim();
		if trimmed.is_empty() {
			return (0..self.entries.len()).collect();
		}

		let tokens: Vec<String> = trimmed
			.to_uppercase()
			.split_whitespace()
			.map(str::to_owned)
			.collect();

		self.entries
			.iter()
			.enumerate()
			.filter(|(_, entry)| {
				let name = entry.name.to_uppercase();
				tokens.iter().all(|token| name.contains(token.as_str()))
			})
			.map(|(position, _)| position)
			.collect()
	}
}

/// The fixed exclusion policy: unnamed ranges the explorer hides.
fn is_excluded(name: &str) -> bool {
	let normalized = name.trim().to_lowercase();
	normalized.starts_with("null")
		|| normalized.contains("private")
		|| normalized.contains("cjk")
		|| normalized.contains("surrogate")
}
