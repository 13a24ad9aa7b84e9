use mesopust_config::MIN_QUERY_CHARS;
use mesopust_domain::{ScoredResult, finalize};
use mesopust_storage::{models::SourceRecord, queries::Table};

use crate::{Error, MesopustService, Result, normalize::normalize};

pub use mesopust_domain::ScoredResult as SearchItem;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub query: String,
	pub items: Vec<SearchItem>,
}

/// Whether `query` is long enough to reach the catalogue. Counts characters, without trimming.
pub fn passes_gate(query: &str) -> bool {
	query.chars().count() >= MIN_QUERY_CHARS as usize
}

impl MesopustService {
	/// Runs the search pipeline. Never fails: any error is logged and yields no items.
	pub async fn search(&self, req: SearchRequest) -> SearchResponse {
		let items = match self.run_search(&req.query).await {
			Ok(items) => items,
			Err(err) => {
				tracing::error!(error = %err, "Search pipeline failed. Returning no results.");

				Vec::new()
			},
		};

		SearchResponse { query: req.query, items }
	}

	async fn run_search(&self, query: &str) -> Result<Vec<ScoredResult>> {
		if !passes_gate(query) {
			return Ok(Vec::new());
		}

		let max_chars = self.cfg.search.max_query_chars as usize;

		if query.chars().count() > max_chars {
			return Err(Error::InvalidRequest {
				message: format!("query must be at most {max_chars} characters."),
			});
		}

		let fetched = self.fan_out(query).await;
		let candidates = fetched
			.iter()
			.flat_map(|rows| rows.iter())
			.map(|record| normalize(record, query))
			.collect::<Vec<_>>();
		let candidate_count = candidates.len();
		let results = finalize(candidates);

		tracing::debug!(candidate_count, result_count = results.len(), "Search ranked.");

		Ok(results)
	}

	/// Queries every table concurrently. Tables that fail contribute no rows.
	async fn fan_out(&self, query: &str) -> [Vec<SourceRecord>; 7] {
		let (items, participants, events, glossary_terms, instruments, uniform_items, roles) =
			tokio::join!(
				self.fetch_table(Table::Items, query),
				self.fetch_table(Table::Participants, query),
				self.fetch_table(Table::Events, query),
				self.fetch_table(Table::GlossaryTerms, query),
				self.fetch_table(Table::Instruments, query),
				self.fetch_table(Table::UniformItems, query),
				self.fetch_table(Table::HierarchyRoles, query),
			);

		[items, participants, events, glossary_terms, instruments, uniform_items, roles]
	}

	async fn fetch_table(&self, table: Table, query: &str) -> Vec<SourceRecord> {
		let limit = self.cfg.search.max_rows_per_table;

		match self.catalogue.search_table(table, query, limit).await {
			Ok(rows) => {
				tracing::debug!(table = table.name(), rows = rows.len(), "Catalogue table searched.");

				rows
			},
			Err(err) => {
				tracing::warn!(
					table = table.name(),
					error = %err,
					"Catalogue table search failed. Treating it as empty."
				);

				Vec::new()
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::passes_gate;

	#[test]
	fn gate_counts_characters_not_bytes() {
		assert!(!passes_gate(""));
		assert!(!passes_gate("č"));
		assert!(passes_gate("če"));
		assert!(passes_gate("  "));
	}
}
