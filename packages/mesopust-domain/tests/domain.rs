use uuid::Uuid;

use mesopust_domain::{
	DetailView, EntityType, FieldSet, ScoredResult, finalize, navigation_target, relevance, score,
};

fn scored(entity_type: EntityType, fields: FieldSet<'_>, query: &str) -> ScoredResult {
	ScoredResult {
		id: Uuid::new_v4(),
		entity_type,
		title: fields.name.to_string(),
		title_local: fields.name_local.map(str::to_string),
		description: fields.description.map(str::to_string),
		relevance: score(&fields, query),
		participant_id: None,
	}
}

#[test]
fn exact_glossary_term_outranks_instrument_with_longer_title() {
	let query = "sopila";
	let instrument = scored(
		EntityType::Instrument,
		FieldSet { name: "Vela Sopila", ..Default::default() },
		query,
	);
	let term = scored(
		EntityType::GlossaryTerm,
		FieldSet {
			name: "Sopila",
			name_local: None,
			description: Some("Woodwind instrument"),
			description_local: None,
		},
		query,
	);
	let results = finalize([term, instrument]);

	assert_eq!(results.len(), 2);
	assert_eq!(results[0].entity_type, EntityType::GlossaryTerm);
	assert_eq!(results[0].relevance, relevance::EXACT_NAME);
	assert_eq!(results[1].entity_type, EntityType::Instrument);
	assert_eq!(results[1].relevance, relevance::NAME_SUBSTRING);
}

#[test]
fn colliding_instrument_hides_exact_glossary_term() {
	let query = "bubanj";
	let term =
		scored(EntityType::GlossaryTerm, FieldSet { name: "Bubanj", ..Default::default() }, query);
	let instrument = scored(
		EntityType::Instrument,
		FieldSet {
			name: "Drum",
			name_local: Some("Bubanj"),
			description: None,
			description_local: None,
		},
		query,
	);
	let results = finalize([term, instrument.clone()]);

	assert_eq!(results, vec![instrument]);
}

#[test]
fn higher_rules_never_rank_below_lower_rules() {
	let query = "kum";
	let rows = [
		("Kumpanija", None, None),
		("Kum", None, None),
		("Stari kum", None, None),
		("Pust", None, Some("kum nosi lutku")),
		("Bakva", None, None),
	];
	let results = finalize(rows.into_iter().map(|(name, name_local, description)| {
		scored(
			EntityType::Item,
			FieldSet { name, name_local, description, description_local: None },
			query,
		)
	}));
	let relevances = results.iter().map(|result| result.relevance).collect::<Vec<_>>();

	assert_eq!(relevances, vec![1_000, 500, 100, 50, 0]);
	assert_eq!(results[0].title, "Kum");
}

#[test]
fn finalize_is_deterministic() {
	let query = "ma";
	let build = || {
		["Maska", "Mačak", "Kamara", "maska", "Zmaj"]
			.into_iter()
			.enumerate()
			.map(|(index, name)| ScoredResult {
				id: Uuid::from_u128(index as u128),
				entity_type: EntityType::Item,
				title: name.to_string(),
				title_local: None,
				description: None,
				relevance: score(&FieldSet { name, ..Default::default() }, query),
				participant_id: None,
			})
			.collect::<Vec<_>>()
	};

	assert_eq!(finalize(build()), finalize(build()));
	assert_eq!(finalize(build()).len(), 4);
}

#[test]
fn entity_types_serialize_as_snake_case_tags() {
	let json = serde_json::to_value(EntityType::GlossaryTerm).expect("Failed to serialize.");

	assert_eq!(json, serde_json::json!("glossary_term"));

	let target = navigation_target(EntityType::UniformItem, Uuid::nil(), None);
	let json = serde_json::to_value(&target).expect("Failed to serialize.");

	assert_eq!(json["view"], serde_json::json!("uniform"));
	assert_eq!(target.view, DetailView::Uniform);
}
