use std::{fmt, str::FromStr};

/// Category a search result belongs to.
///
/// `Participant` and `Role` come from the same `participants` table and are split by its
/// `show_in_main_menu` flag. Hierarchy roles are also reported as `Role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
	Item,
	Participant,
	Role,
	Event,
	GlossaryTerm,
	Instrument,
	UniformItem,
}
impl EntityType {
	pub const ALL: [Self; 7] = [
		Self::Item,
		Self::Participant,
		Self::Role,
		Self::Event,
		Self::GlossaryTerm,
		Self::Instrument,
		Self::UniformItem,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Item => "item",
			Self::Participant => "participant",
			Self::Role => "role",
			Self::Event => "event",
			Self::GlossaryTerm => "glossary_term",
			Self::Instrument => "instrument",
			Self::UniformItem => "uniform_item",
		}
	}
}

impl fmt::Display for EntityType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEntityTypeError {
	pub value: String,
}

impl fmt::Display for ParseEntityTypeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Unknown entity type {:?}.", self.value)
	}
}

impl std::error::Error for ParseEntityTypeError {}

impl FromStr for EntityType {
	type Err = ParseEntityTypeError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|entity_type| entity_type.as_str() == value)
			.ok_or_else(|| ParseEntityTypeError { value: value.to_string() })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_round_trips_every_tag() {
		for entity_type in EntityType::ALL {
			assert_eq!(entity_type.as_str().parse::<EntityType>(), Ok(entity_type));
		}
	}

	#[test]
	fn parse_rejects_camel_case_tag() {
		let err = "glossaryTerm".parse::<EntityType>().expect_err("Expected parse error.");

		assert_eq!(err.value, "glossaryTerm");
	}
}
