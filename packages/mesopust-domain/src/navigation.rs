use uuid::Uuid;

use crate::EntityType;

/// Detail screen a selected result opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailView {
	Item,
	Participant,
	Event,
	Instrument,
	Uniform,
	Glossary,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavigationTarget {
	pub view: DetailView,
	pub entity_type: EntityType,
	pub id: Uuid,
	pub participant_id: Option<Uuid>,
}

impl EntityType {
	pub fn detail_view(self) -> DetailView {
		match self {
			Self::Item => DetailView::Item,
			Self::Participant => DetailView::Participant,
			Self::Event => DetailView::Event,
			Self::Instrument => DetailView::Instrument,
			Self::Role | Self::UniformItem => DetailView::Uniform,
			Self::GlossaryTerm => DetailView::Glossary,
		}
	}
}

pub fn navigation_target(
	entity_type: EntityType,
	id: Uuid,
	participant_id: Option<Uuid>,
) -> NavigationTarget {
	NavigationTarget { view: entity_type.detail_view(), entity_type, id, participant_id }
}
