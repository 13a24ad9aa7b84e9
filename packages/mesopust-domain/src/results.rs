use std::collections::HashMap;

use uuid::Uuid;

use crate::EntityType;

/// A catalogue row after scoring, in the shape every entity type shares.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoredResult {
	pub id: Uuid,
	pub entity_type: EntityType,
	pub title: String,
	pub title_local: Option<String>,
	pub description: Option<String>,
	pub relevance: i32,
	/// Owning participant for instruments, roles, and uniform items.
	pub participant_id: Option<Uuid>,
}

/// Deduplication key: the local title when present, else the title, trimmed and lowercased.
pub fn normalized_title(result: &ScoredResult) -> String {
	let title = result
		.title_local
		.as_deref()
		.filter(|value| !value.is_empty())
		.unwrap_or(result.title.as_str());

	title.trim().to_lowercase()
}

/// Collapses candidates that share a normalized title.
///
/// Keys keep the position of their first occurrence. Collisions resolve in order: an incoming
/// instrument always replaces the stored candidate, a stored instrument is never replaced by
/// anything else, and otherwise the strictly higher relevance wins.
///
/// The key ignores entity type, so unrelated entities with the same display name collapse too.
pub fn dedupe(candidates: impl IntoIterator<Item = ScoredResult>) -> Vec<ScoredResult> {
	let mut kept: Vec<ScoredResult> = Vec::new();
	let mut slots: HashMap<String, usize> = HashMap::new();

	for candidate in candidates {
		let key = normalized_title(&candidate);

		match slots.get(&key).copied() {
			Some(slot) =>
				if replaces(&kept[slot], &candidate) {
					kept[slot] = candidate;
				},
			None => {
				slots.insert(key, kept.len());
				kept.push(candidate);
			},
		}
	}

	kept
}

/// Stable sort, highest relevance first.
pub fn rank(results: &mut [ScoredResult]) {
	results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
}

pub fn finalize(candidates: impl IntoIterator<Item = ScoredResult>) -> Vec<ScoredResult> {
	let mut results = dedupe(candidates);

	rank(&mut results);

	results
}

fn replaces(stored: &ScoredResult, incoming: &ScoredResult) -> bool {
	if incoming.entity_type == EntityType::Instrument {
		return true;
	}
	if stored.entity_type == EntityType::Instrument {
		return false;
	}

	incoming.relevance > stored.relevance
}
