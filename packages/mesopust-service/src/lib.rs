pub mod entity;
pub mod normalize;
pub mod search;
pub mod session;

mod error;

pub use entity::{EntityRequest, EntityResponse, NavigateRequest};
pub use error::{Error, Result};
pub use search::{SearchItem, SearchRequest, SearchResponse};
pub use session::{SearchSession, SessionState, SubmitOutcome};

use std::{future::Future, pin::Pin, sync::Arc};

use uuid::Uuid;

use mesopust_config::Config;
use mesopust_storage::{
	db::Db,
	models::SourceRecord,
	queries::{self, Table},
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read-only access to the catalogue tables.
pub trait CatalogueRepository
where
	Self: Send + Sync,
{
	/// Rows of `table` where any searchable text column case-insensitively contains `query`.
	fn search_table<'a>(
		&'a self,
		table: Table,
		query: &'a str,
		limit: u32,
	) -> BoxFuture<'a, Result<Vec<SourceRecord>>>;

	fn fetch_record<'a>(
		&'a self,
		table: Table,
		id: Uuid,
	) -> BoxFuture<'a, Result<Option<SourceRecord>>>;
}

/// Postgres-backed catalogue.
pub struct PgCatalogue {
	pub db: Db,
}
impl PgCatalogue {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}

impl CatalogueRepository for PgCatalogue {
	fn search_table<'a>(
		&'a self,
		table: Table,
		query: &'a str,
		limit: u32,
	) -> BoxFuture<'a, Result<Vec<SourceRecord>>> {
		Box::pin(async move { Ok(queries::search_table(&self.db, table, query, limit).await?) })
	}

	fn fetch_record<'a>(
		&'a self,
		table: Table,
		id: Uuid,
	) -> BoxFuture<'a, Result<Option<SourceRecord>>> {
		Box::pin(async move { Ok(queries::fetch_record(&self.db, table, id).await?) })
	}
}

pub struct MesopustService {
	pub cfg: Config,
	pub catalogue: Arc<dyn CatalogueRepository>,
}
impl MesopustService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, catalogue: Arc::new(PgCatalogue::new(db)) }
	}

	pub fn with_catalogue(cfg: Config, catalogue: Arc<dyn CatalogueRepository>) -> Self {
		Self { cfg, catalogue }
	}
}
