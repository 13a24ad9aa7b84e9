use uuid::Uuid;

use mesopust_domain::{EntityType, NavigationTarget, navigation_target};
use mesopust_storage::{models::SourceRecord, queries::Table};

use crate::{Error, MesopustService, Result, normalize};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NavigateRequest {
	pub entity_type: EntityType,
	pub id: Uuid,
	pub participant_id: Option<Uuid>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EntityRequest {
	pub entity_type: EntityType,
	pub id: Uuid,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EntityResponse {
	pub target: NavigationTarget,
	pub record: SourceRecord,
}

/// Tables that can hold an entity of the given type, in lookup order.
pub fn tables_for(entity_type: EntityType) -> &'static [Table] {
	match entity_type {
		EntityType::Item => &[Table::Items],
		EntityType::Participant => &[Table::Participants],
		EntityType::Role => &[Table::Participants, Table::HierarchyRoles],
		EntityType::Event => &[Table::Events],
		EntityType::GlossaryTerm => &[Table::GlossaryTerms],
		EntityType::Instrument => &[Table::Instruments],
		EntityType::UniformItem => &[Table::UniformItems],
	}
}

impl MesopustService {
	pub fn navigate(&self, req: NavigateRequest) -> NavigationTarget {
		navigation_target(req.entity_type, req.id, req.participant_id)
	}

	pub async fn entity(&self, req: EntityRequest) -> Result<EntityResponse> {
		for &table in tables_for(req.entity_type) {
			if let Some(record) = self.catalogue.fetch_record(table, req.id).await? {
				let target =
					navigation_target(req.entity_type, req.id, normalize::participant_id(&record));

				return Ok(EntityResponse { target, record });
			}
		}

		Err(Error::NotFound { message: format!("No {} with id {}.", req.entity_type, req.id) })
	}
}
