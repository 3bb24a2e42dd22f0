//! Fuzzy ranking of candidate names against the current query.

use frizbee::{Config, match_list};

/// A candidate name that matched the query, with its rank information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
	pub name: &'static str,
	/// Position of the name in the haystack handed to the matcher.
	pub index: usize,
	pub score: u16,
}

/// Ranks a fixed set of names against a query.
///
/// Implementations must be deterministic: the same query and names always
/// produce the same ordered matches.
pub trait Matcher {
	/// Return the names matching `query`, best first.
	fn find(&self, query: &str, names: &[&'static str]) -> Vec<Match>;
}

/// [`Matcher`] backed by frizbee's Smith-Waterman scoring.
///
/// Matching is a strict case-insensitive subsequence match. An empty query
/// matches every name in its original order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

/// Builds the matching options used for every query.
pub fn config_for_query() -> Config {
	Config {
		prefilter: true,
		max_typos: Some(0),
		sort: false,
		..Config::default()
	}
}

impl Matcher for FuzzyMatcher {
	fn find(&self, query: &str, names: &[&'static str]) -> Vec<Match> {
		if query.is_empty() {
			return names
				.iter()
				.copied()
				.enumerate()
				.map(|(index, name)| Match {
					name,
					index,
					score: 0,
				})
				.collect();
		}

		let config = config_for_query();
		let mut matches: Vec<Match> = match_list(query, names, &config)
			.into_iter()
			.filter(|entry| entry.score > 0)
			.filter_map(|entry| {
				let index = entry.index as usize;
				names.get(index).map(|&name| Match {
					name,
					index,
					score: entry.score,
				})
			})
			.collect();

		matches.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index)));
		matches
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const NAMES: &[&str] = &["smile", "smirk", "smiley", "cat", "scream_cat", "rocket"];

	fn names_of(matches: &[Match]) -> Vec<&'static str> {
		matches.iter().map(|entry| entry.name).collect()
	}

	#[test]
	fn empty_query_returns_every_name_in_order() {
		let matches = FuzzyMatcher.find("", NAMES);

		assert_eq!(names_of(&matches), NAMES.to_vec());
		assert!(matches.iter().all(|entry| entry.score == 0));
		assert_eq!(
			matches.iter().map(|entry| entry.index).collect::<Vec<_>>(),
			(0..NAMES.len()).collect::<Vec<_>>()
		);
	}

	#[test]
	fn same_query_is_deterministic() {
		for query in ["s", "sm", "smi", "cat", "zzz"] {
			assert_eq!(FuzzyMatcher.find(query, NAMES), FuzzyMatcher.find(query, NAMES));
		}
	}

	#[test]
	fn matches_are_subsequences_of_the_query() {
		let matches = FuzzyMatcher.find("cat", NAMES);
		let found = names_of(&matches);

		assert!(found.contains(&"cat"));
		assert!(found.contains(&"scream_cat"));
		assert!(!found.contains(&"rocket"));
		assert!(!found.contains(&"smile"));
	}

	#[test]
	fn results_are_ordered_by_descending_score() {
		let matches = FuzzyMatcher.find("sm", NAMES);

		assert!(!matches.is_empty());
		for pair in matches.windows(2) {
			let (first, second) = (pair[0], pair[1]);
			assert!(
				first.score > second.score
					|| (first.score == second.score && first.index < second.index),
				"{first:?} ranked before {second:?}"
			);
		}
	}

	#[test]
	fn unmatched_query_returns_nothing() {
		assert!(FuzzyMatcher.find("qqq", NAMES).is_empty());
	}

	#[test]
	fn match_index_points_back_into_names() {
		for entry in FuzzyMatcher.find("s", NAMES) {
			assert_eq!(NAMES[entry.index], entry.name);
		}
	}
}
