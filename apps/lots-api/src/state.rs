use std::sync::Arc;

use lots_providers::LocalEmbedder;
use lots_service::SearchService;
use lots_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SearchService>,
}
impl AppState {
	pub async fn new(config: lots_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;
		let embedder = LocalEmbedder::load(&config.embedding)?;
		let service = SearchService::new(config, db, Arc::new(embedder));

		Ok(Self { service: Arc::new(service) })
	}
}
