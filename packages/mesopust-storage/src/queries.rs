use sqlx::{FromRow, postgres::PgRow};
use uuid::Uuid;

use crate::{
	Error, Result,
	db::Db,
	models::{
		Event, GlossaryTerm, HierarchyRole, Instrument, Item, Participant, SourceRecord,
		UniformItem,
	},
};

/// Searchable catalogue tables, in fan-out order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
	Items,
	Participants,
	Events,
	GlossaryTerms,
	Instruments,
	UniformItems,
	HierarchyRoles,
}
impl Table {
	pub const ALL: [Self; 7] = [
		Self::Items,
		Self::Participants,
		Self::Events,
		Self::GlossaryTerms,
		Self::Instruments,
		Self::UniformItems,
		Self::HierarchyRoles,
	];

	pub fn name(self) -> &'static str {
		match self {
			Self::Items => "items",
			Self::Participants => "participants",
			Self::Events => "events",
			Self::GlossaryTerms => "glossary_terms",
			Self::Instruments => "instruments",
			Self::UniformItems => "uniform_items",
			Self::HierarchyRoles => "hierarchy_roles",
		}
	}

	pub fn select_columns(self) -> &'static str {
		match self {
			Self::Items => "id, name, name_local, description, description_local",
			Self::Participants =>
				"id, name, name_croatian, description, description_croatian, show_in_main_menu",
			Self::Events => "id, title, title_local, description, start_date, end_date",
			Self::GlossaryTerms => "id, term, term_local, definition, definition_local",
			Self::Instruments =>
				"id, name, name_croatian, description, description_croatian, participant_id",
			Self::UniformItems =>
				"id, item_name, item_name_croatian, description, description_croatian, participant_id",
			Self::HierarchyRoles =>
				"id, title, title_croatian, description, description_croatian, participant_id",
		}
	}

	/// Text columns matched by [`search_table`].
	pub fn search_columns(self) -> &'static [&'static str] {
		match self {
			Self::Items => &["name", "name_local", "description", "description_local"],
			Self::Participants =>
				&["name", "name_croatian", "description", "description_croatian"],
			Self::Events => &["title", "title_local", "description"],
			Self::GlossaryTerms => &["term", "term_local", "definition", "definition_local"],
			Self::Instruments =>
				&["name", "name_croatian", "description", "description_croatian"],
			Self::UniformItems =>
				&["item_name", "item_name_croatian", "description", "description_croatian"],
			Self::HierarchyRoles =>
				&["title", "title_croatian", "description", "description_croatian"],
		}
	}
}

/// Wraps `query` for `ILIKE` so that it matches as a literal substring.
pub fn contains_pattern(query: &str) -> String {
	let mut out = String::with_capacity(query.len() + 2);

	out.push('%');

	for ch in query.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			out.push('\\');
		}

		out.push(ch);
	}

	out.push('%');

	out
}

pub fn search_sql(table: Table) -> String {
	let conditions = table
		.search_columns()
		.iter()
		.map(|column| format!("{column} ILIKE $1 ESCAPE '\\'"))
		.collect::<Vec<_>>()
		.join("\n\tOR ");

	format!(
		"\
SELECT {columns}
FROM {table}
WHERE {conditions}
ORDER BY id
LIMIT $2",
		columns = table.select_columns(),
		table = table.name(),
	)
}

/// Rows of `table` where any search column case-insensitively contains `query`.
pub async fn search_table(
	db: &Db,
	table: Table,
	query: &str,
	limit: u32,
) -> Result<Vec<SourceRecord>> {
	if limit == 0 {
		return Err(Error::InvalidArgument("limit must be greater than zero.".to_string()));
	}

	let sql = search_sql(table);
	let pattern = contains_pattern(query);
	let limit = i64::from(limit);
	let records = match table {
		Table::Items =>
			wrap(fetch_matching::<Item>(db, &sql, &pattern, limit).await?, SourceRecord::Item),
		Table::Participants => wrap(
			fetch_matching::<Participant>(db, &sql, &pattern, limit).await?,
			SourceRecord::Participant,
		),
		Table::Events =>
			wrap(fetch_matching::<Event>(db, &sql, &pattern, limit).await?, SourceRecord::Event),
		Table::GlossaryTerms => wrap(
			fetch_matching::<GlossaryTerm>(db, &sql, &pattern, limit).await?,
			SourceRecord::GlossaryTerm,
		),
		Table::Instruments => wrap(
			fetch_matching::<Instrument>(db, &sql, &pattern, limit).await?,
			SourceRecord::Instrument,
		),
		Table::UniformItems => wrap(
			fetch_matching::<UniformItem>(db, &sql, &pattern, limit).await?,
			SourceRecord::UniformItem,
		),
		Table::HierarchyRoles => wrap(
			fetch_matching::<HierarchyRole>(db, &sql, &pattern, limit).await?,
			SourceRecord::HierarchyRole,
		),
	};

	Ok(records)
}

pub async fn fetch_record(db: &Db, table: Table, id: Uuid) -> Result<Option<SourceRecord>> {
	let sql = format!(
		"\
SELECT {columns}
FROM {table}
WHERE id = $1",
		columns = table.select_columns(),
		table = table.name(),
	);
	let record = match table {
		Table::Items => fetch_by_id::<Item>(db, &sql, id).await?.map(SourceRecord::Item),
		Table::Participants =>
			fetch_by_id::<Participant>(db, &sql, id).await?.map(SourceRecord::Participant),
		Table::Events => fetch_by_id::<Event>(db, &sql, id).await?.map(SourceRecord::Event),
		Table::GlossaryTerms =>
			fetch_by_id::<GlossaryTerm>(db, &sql, id).await?.map(SourceRecord::GlossaryTerm),
		Table::Instruments =>
			fetch_by_id::<Instrument>(db, &sql, id).await?.map(SourceRecord::Instrument),
		Table::UniformItems =>
			fetch_by_id::<UniformItem>(db, &sql, id).await?.map(SourceRecord::UniformItem),
		Table::HierarchyRoles =>
			fetch_by_id::<HierarchyRole>(db, &sql, id).await?.map(SourceRecord::HierarchyRole),
	};

	Ok(record)
}

async fn fetch_matching<T>(db: &Db, sql: &str, pattern: &str, limit: i64) -> Result<Vec<T>>
where
	T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
	let rows: Vec<T> =
		sqlx::query_as(sql).bind(pattern).bind(limit).fetch_all(&db.pool).await?;

	Ok(rows)
}

async fn fetch_by_id<T>(db: &Db, sql: &str, id: Uuid) -> Result<Option<T>>
where
	T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
	let row: Option<T> = sqlx::query_as(sql).bind(id).fetch_optional(&db.pool).await?;

	Ok(row)
}

fn wrap<T>(rows: Vec<T>, variant: fn(T) -> SourceRecord) -> Vec<SourceRecord> {
	rows.into_iter().map(variant).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn contains_pattern_escapes_like_wildcards() {
		assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
		assert_eq!(contains_pattern("sopila"), "%sopila%");
	}

	#[test]
	fn search_sql_matches_every_search_column() {
		let sql = search_sql(Table::Events);

		assert!(sql.contains("FROM events"));
		assert!(sql.contains("title ILIKE $1"));
		assert!(sql.contains("title_local ILIKE $1"));
		assert!(sql.contains("description ILIKE $1"));
		assert_eq!(sql.matches("ILIKE").count(), 3);
		assert!(sql.contains("LIMIT $2"));
	}

	#[test]
	fn participants_select_menu_flag() {
		assert!(Table::Participants.select_columns().contains("show_in_main_menu"));
	}
}
