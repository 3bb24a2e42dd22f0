//! The fixed name→emoji table searched by the picker.
//!
//! A [`Catalog`] is immutable once built. The builtin instance is
//! constructed lazily on first use and shared for the process lifetime.

mod table;

use std::sync::LazyLock;

use indexmap::IndexMap;

static BUILTIN: LazyLock<Catalog> =
	LazyLock::new(|| Catalog::from_pairs(table::EMOJI.iter().copied()));

/// Ordered lookup table from candidate names to the value printed on selection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	entries: IndexMap<&'static str, &'static str>,
	names: Vec<&'static str>,
}

impl Catalog {
	/// Build a catalog from `(name, value)` pairs.
	///
	/// Insertion order is preserved and becomes the order shown for an empty
	/// query. When a name repeats, the first value is kept.
	pub fn from_pairs<I>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (&'static str, &'static str)>,
	{
		let mut entries = IndexMap::new();
		for (name, value) in pairs {
			entries.entry(name).or_insert(value);
		}
		let names = entries.keys().copied().collect();
		Self { entries, names }
	}

	/// The emoji table compiled into the binary.
	pub fn builtin() -> &'static Catalog {
		&BUILTIN
	}

	pub fn lookup(&self, name: &str) -> Option<&'static str> {
		self.entries.get(name).copied()
	}

	/// Candidate names in catalog order.
	pub fn names(&self) -> &[&'static str] {
		&self.names
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
		self.entries.iter().map(|(name, value)| (*name, *value))
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn builtin_maps_smile_to_slight_smile() {
		assert_eq!(Catalog::builtin().lookup("smile"), Some("🙂"));
	}

	#[test]
	fn builtin_table_has_unique_non_empty_entries() {
		let mut seen = HashSet::new();
		for (name, value) in table::EMOJI {
			assert!(!name.is_empty(), "empty name in table");
			assert!(!value.is_empty(), "empty value for `{name}`");
			assert!(seen.insert(*name), "duplicate name `{name}`");
		}
		assert_eq!(Catalog::builtin().len(), table::EMOJI.len());
	}

	#[test]
	fn lookup_of_unknown_name_is_none() {
		assert_eq!(Catalog::builtin().lookup("definitely-not-an-emoji"), None);
	}

	#[test]
	fn from_pairs_keeps_first_value_and_order() {
		let catalog = Catalog::from_pairs([("b", "2"), ("a", "1"), ("b", "3")]);

		assert_eq!(catalog.names(), &["b", "a"]);
		assert_eq!(catalog.lookup("b"), Some("2"));
		assert_eq!(catalog.len(), 2);
		assert_eq!(
			catalog.iter().collect::<Vec<_>>(),
			vec![("b", "2"), ("a", "1")]
		);
	}

	#[test]
	fn default_catalog_is_empty() {
		let catalog = Catalog::default();
		assert!(catalog.is_empty());
		assert!(catalog.names().is_empty());
	}
}
