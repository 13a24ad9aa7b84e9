use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct Item {
	pub id: Uuid,
	pub name: String,
	pub name_local: Option<String>,
	pub description: Option<String>,
	pub description_local: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct Participant {
	pub id: Uuid,
	pub name: String,
	pub name_croatian: Option<String>,
	pub description: Option<String>,
	pub description_croatian: Option<String>,
	pub show_in_main_menu: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct Event {
	pub id: Uuid,
	pub title: String,
	pub title_local: Option<String>,
	pub description: Option<String>,
	#[serde(default, with = "crate::date_serde::option")]
	pub start_date: Option<Date>,
	#[serde(default, with = "crate::date_serde::option")]
	pub end_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct GlossaryTerm {
	pub id: Uuid,
	pub term: String,
	pub term_local: Option<String>,
	pub definition: Option<String>,
	pub definition_local: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct Instrument {
	pub id: Uuid,
	pub name: String,
	pub name_croatian: Option<String>,
	pub description: Option<String>,
	pub description_croatian: Option<String>,
	pub participant_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct UniformItem {
	pub id: Uuid,
	pub item_name: String,
	pub item_name_croatian: Option<String>,
	pub description: Option<String>,
	pub description_croatian: Option<String>,
	pub participant_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct HierarchyRole {
	pub id: Uuid,
	pub title: String,
	pub title_croatian: Option<String>,
	pub description: Option<String>,
	pub description_croatian: Option<String>,
	pub participant_id: Option<Uuid>,
}

/// A row from any searchable catalogue table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "table", rename_all = "snake_case")]
pub enum SourceRecord {
	Item(Item),
	Participant(Participant),
	Event(Event),
	GlossaryTerm(GlossaryTerm),
	Instrument(Instrument),
	UniformItem(UniformItem),
	HierarchyRole(HierarchyRole),
}
impl SourceRecord {
	pub fn id(&self) -> Uuid {
		match self {
			Self::Item(row) => row.id,
			Self::Participant(row) => row.id,
			Self::Event(row) => row.id,
			Self::GlossaryTerm(row) => row.id,
			Self::Instrument(row) => row.id,
			Self::UniformItem(row) => row.id,
			Self::HierarchyRole(row) => row.id,
		}
	}
}
