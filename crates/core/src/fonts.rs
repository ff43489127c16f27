//! System font enumeration and glyph-coverage queries.
//!
//! Families are identified by their name string, never by a handle from
//! a font toolkit, so equality stays stable across the UI. Coverage is
//! answered from each face's character map and cached per code point;
//! a catalog that fails to enumerate anything degrades to empty lists
//! instead of failing the application.

use std::collections::HashMap;

use fontdb::{Database, ID};
use ttf_parser::Face;

/// Installed font families and their per-code-point glyph coverage.
pub struct FontCatalog {
	db: Database,
	families: Vec<String>,
	faces_by_family: HashMap<String, Vec<ID>>,
	coverage: HashMap<u32, Vec<String>>,
}

impl FontCatalog {
	/// Enumerate the fonts installed on this system.
	///
	/// Inability to find any faces is a platform problem, not a fatal
	/// one: it is logged and the catalog stays empty.
	pub fn load_system() -> Self {
		let mut db = Database::new();
		db.load_system_fonts();
		let catalog = Self::from_database(db);
		if catalog.families.is_empty() {
			log::warn!("no system fonts could be enumerated; the font panel will stay empty");
		} else {
			log::info!("enumerated {} font families", catalog.families.len());
		}
		catalog
	}

	/// A catalog with no faces at all. Useful where font coverage is
	/// irrelevant, e.g. headless tests.
	pub fn empty() -> Self {
		Self::from_database(Database::new())
	}

	/// Build a catalog over an explicit face database.
	pub fn from_database(db: Database) -> Self {
		let mut faces_by_family: HashMap<String, Vec<ID>> = HashMap::new();
		for face in db.faces() {
			let Some((family, _)) = face.families.first() else {
				continue;
			};
			faces_by_family.entry(family.clone()).or_default().push(face.id);
		}

		let mut families: Vec<String> = faces_by_family.keys().cloned().collect();
		families.sort_unstable();

		Self {
			db,
			families,
			faces_by_family,
			coverage: HashMap::new(),
		}
	}

	/// All known family names, sorted and deduplicated.
	pub fn families(&self) -> &[String] {
		&self.families
	}

	pub fn is_empty(&self) -> bool {
		self.families.is_empty()
	}

	/// Families with at least one face whose character map covers
	/// `code_point`. Results are cached for the catalog's lifetime.
	/// Surrogates and other unencodable values yield an empty list.
	pub fn supporting_families(&mut self, code_point: u32) -> &[String] {
		if !self.coverage.contains_key(&code_point) {
			let supported = self.compute_support(code_point);
			self.coverage.insert(code_point, supported);
		}
		self.coverage
			.get(&code_point)
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}

	fn compute_support(&self, code_point: u32) -> Vec<String> {
		let Some(ch) = char::from_u32(code_point) else {
			return Vec::new();
		};

		self.families
			.iter()
			.filter(|family| {
				self.faces_by_family
					.get(family.as_str())
					.is_some_and(|ids| ids.iter().any(|&id| self.face_covers(id, ch)))
			})
			.cloned()
			.collect()
	}

	fn face_covers(&self, id: ID, ch: char) -> bool {
		self.db
			.with_face_data(id, |data, face_index| match Face::parse(data, face_index) {
				Ok(face) => face.glyph_index(ch).is_some(),
				Err(err) => {
					log::warn!("failed to parse font face {id:?}: {err}");
					false
				}
			})
			.unwrap_or(false)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_database_yields_an_empty_catalog() {
		let mut catalog = FontCatalog::from_database(Database::new());
		assert!(catalog.is_empty());
		assert!(catalog.families().is_empty());
		assert!(catalog.supporting_families(65).is_empty());
	}

	#[test]
	fn surrogates_never_report_coverage() {
		let mut catalog = FontCatalog::from_database(Database::new());
		assert!(catalog.supporting_families(0xD800).is_empty());
	}

	#[test]
	fn coverage_queries_are_cached() {
		let mut catalog = FontCatalog::from_database(Database::new());
		let first = catalog.supporting_families(65).to_vec();
		let second = catalog.supporting_families(65).to_vec();
		assert_eq!(first, second);
		assert!(catalog.coverage.contains_key(&65));
	}
}
