use std::sync::Arc;

use mesopust_service::MesopustService;
use mesopust_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<MesopustService>,
}
impl AppState {
	pub async fn new(config: mesopust_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self::from_service(MesopustService::new(config, db)))
	}

	pub fn from_service(service: MesopustService) -> Self {
		Self { service: Arc::new(service) }
	}
}
