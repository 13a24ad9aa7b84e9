pub mod entity;
pub mod navigation;
pub mod relevance;
pub mod results;

pub use entity::{EntityType, ParseEntityTypeError};
pub use navigation::{DetailView, NavigationTarget, navigation_target};
pub use relevance::{FieldSet, score};
pub use results::{ScoredResult, dedupe, finalize, normalized_title, rank};
