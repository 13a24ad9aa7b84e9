//! One mapping per catalogue table from a raw row to a scored result.

use uuid::Uuid;

use mesopust_domain::{EntityType, FieldSet, ScoredResult, score};
use mesopust_storage::models::{
	Event, GlossaryTerm, HierarchyRole, Instrument, Item, Participant, SourceRecord, UniformItem,
};

pub fn normalize(record: &SourceRecord, query: &str) -> ScoredResult {
	match record {
		SourceRecord::Item(row) => item(row, query),
		SourceRecord::Participant(row) => participant(row, query),
		SourceRecord::Event(row) => event(row, query),
		SourceRecord::GlossaryTerm(row) => glossary_term(row, query),
		SourceRecord::Instrument(row) => instrument(row, query),
		SourceRecord::UniformItem(row) => uniform_item(row, query),
		SourceRecord::HierarchyRole(row) => hierarchy_role(row, query),
	}
}

/// Participants hidden from the main menu are individual office-holders and report as roles.
pub fn participant_entity_type(row: &Participant) -> EntityType {
	if row.show_in_main_menu { EntityType::Participant } else { EntityType::Role }
}

/// Participant a record navigates through, if any.
pub fn participant_id(record: &SourceRecord) -> Option<Uuid> {
	match record {
		SourceRecord::Participant(row) => match participant_entity_type(row) {
			EntityType::Role => Some(row.id),
			_ => None,
		},
		SourceRecord::Instrument(row) => row.participant_id,
		SourceRecord::UniformItem(row) => row.participant_id,
		SourceRecord::HierarchyRole(row) => row.participant_id,
		SourceRecord::Item(_) | SourceRecord::Event(_) | SourceRecord::GlossaryTerm(_) => None,
	}
}

fn item(row: &Item, query: &str) -> ScoredResult {
	let fields = FieldSet {
		name: &row.name,
		name_local: row.name_local.as_deref(),
		description: row.description.as_deref(),
		description_local: row.description_local.as_deref(),
	};

	build(row.id, EntityType::Item, fields, query, None)
}

fn participant(row: &Participant, query: &str) -> ScoredResult {
	let fields = FieldSet {
		name: &row.name,
		name_local: row.name_croatian.as_deref(),
		description: row.description.as_deref(),
		description_local: row.description_croatian.as_deref(),
	};
	let entity_type = participant_entity_type(row);
	let participant_id = (entity_type == EntityType::Role).then_some(row.id);

	build(row.id, entity_type, fields, query, participant_id)
}

fn event(row: &Event, query: &str) -> ScoredResult {
	let fields = FieldSet {
		name: &row.title,
		name_local: row.title_local.as_deref(),
		description: row.description.as_deref(),
		description_local: None,
	};

	build(row.id, EntityType::Event, fields, query, None)
}

fn glossary_term(row: &GlossaryTerm, query: &str) -> ScoredResult {
	let fields = FieldSet {
		name: &row.term,
		name_local: row.term_local.as_deref(),
		description: row.definition.as_deref(),
		description_local: row.definition_local.as_deref(),
	};

	build(row.id, EntityType::GlossaryTerm, fields, query, None)
}

fn instrument(row: &Instrument, query: &str) -> ScoredResult {
	let fields = FieldSet {
		name: &row.name,
		name_local: row.name_croatian.as_deref(),
		description: row.description.as_deref(),
		description_local: row.description_croatian.as_deref(),
	};

	build(row.id, EntityType::Instrument, fields, query, row.participant_id)
}

fn uniform_item(row: &UniformItem, query: &str) -> ScoredResult {
	let fields = FieldSet {
		name: &row.item_name,
		name_local: row.item_name_croatian.as_deref(),
		description: row.description.as_deref(),
		description_local: row.description_croatian.as_deref(),
	};

	build(row.id, EntityType::UniformItem, fields, query, row.participant_id)
}

fn hierarchy_role(row: &HierarchyRole, query: &str) -> ScoredResult {
	let fields = FieldSet {
		name: &row.title,
		name_local: row.title_croatian.as_deref(),
		description: row.description.as_deref(),
		description_local: row.description_croatian.as_deref(),
	};

	build(row.id, EntityType::Role, fields, query, row.participant_id)
}

fn build(
	id: Uuid,
	entity_type: EntityType,
	fields: FieldSet<'_>,
	query: &str,
	participant_id: Option<Uuid>,
) -> ScoredResult {
	ScoredResult {
		id,
		entity_type,
		title: fields.name.to_string(),
		title_local: non_empty(fields.name_local),
		description: non_empty(fields.description_local).or_else(|| non_empty(fields.description)),
		relevance: score(&fields, query),
		participant_id,
	}
}

fn non_empty(value: Option<&str>) -> Option<String> {
	value.filter(|value| !value.is_empty()).map(str::to_string)
}
