//! Heuristic relevance scoring for catalogue rows.
//!
//! Every table exposes the same four text slots: a primary name, an optional local name, a
//! description, and an optional local description. A row is scored against the raw query by the
//! first rule of a fixed ladder that matches it.

pub const EXACT_NAME: i32 = 1_000;
pub const NAME_PREFIX: i32 = 500;
pub const NAME_SUBSTRING: i32 = 100;
pub const ALL_WORDS: i32 = 50;
pub const SOME_WORDS: i32 = 20;
pub const DESCRIPTION_SUBSTRING: i32 = 10;
pub const NO_MATCH: i32 = 0;

/// The text slots of one row, borrowed from whichever table it came from.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldSet<'a> {
	pub name: &'a str,
	pub name_local: Option<&'a str>,
	pub description: Option<&'a str>,
	pub description_local: Option<&'a str>,
}

/// Scores a row against `query`, case-insensitively.
///
/// Absent fields compare as empty strings. The ladder, first match wins:
///
/// | Rule | Score |
/// |---|---|
/// | name or local name equals the query | 1000 |
/// | name or local name starts with the query | 500 |
/// | name or local name contains the query | 100 |
/// | every whitespace-separated query word found in some field | 50 |
/// | some query words found | 20 |
/// | description or local description contains the query | 10 |
/// | otherwise | 0 |
pub fn score(fields: &FieldSet<'_>, query: &str) -> i32 {
	let query = query.to_lowercase();
	let name = fields.name.to_lowercase();
	let name_local = lowercase_or_empty(fields.name_local);
	let description = lowercase_or_empty(fields.description);
	let description_local = lowercase_or_empty(fields.description_local);

	if name == query || name_local == query {
		return EXACT_NAME;
	}
	if name.starts_with(&query) || name_local.starts_with(&query) {
		return NAME_PREFIX;
	}
	if name.contains(&query) || name_local.contains(&query) {
		return NAME_SUBSTRING;
	}

	let words = query.split_whitespace().collect::<Vec<_>>();

	if !words.is_empty() {
		let haystacks = [&name, &name_local, &description, &description_local];
		let matched = words
			.iter()
			.filter(|word| haystacks.iter().any(|haystack| haystack.contains(**word)))
			.count();

		if matched == words.len() {
			return ALL_WORDS;
		}
		if matched > 0 {
			return SOME_WORDS;
		}
	}

	if description.contains(&query) || description_local.contains(&query) {
		return DESCRIPTION_SUBSTRING;
	}

	NO_MATCH
}

fn lowercase_or_empty(value: Option<&str>) -> String {
	value.map(str::to_lowercase).unwrap_or_default()
}
