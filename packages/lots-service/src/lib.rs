pub mod search;
pub mod sources;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

pub use error::{Error, Result};
pub use lots_domain::{normalize_query, order_participants};
pub use search::{SearchItem, SearchRequest, SearchResponse};
pub use sources::SourcesResponse;

use lots_config::Config;
use lots_providers::LocalEmbedder;
use lots_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Seam for the embedding model so tests can stub inference. The default
/// implementation is the process-wide [`LocalEmbedder`].
pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		texts: &'a [String],
	) -> BoxFuture<'a, lots_providers::Result<Vec<Vec<f32>>>>;
}

impl EmbeddingProvider for LocalEmbedder {
	fn embed<'a>(
		&'a self,
		texts: &'a [String],
	) -> BoxFuture<'a, lots_providers::Result<Vec<Vec<f32>>>> {
		Box::pin(LocalEmbedder::embed(self, texts))
	}
}

pub struct SearchService {
	pub cfg: Config,
	pub db: Db,
	pub embedder: Arc<dyn EmbeddingProvider>,
}
impl SearchService {
	pub fn new(cfg: Config, db: Db, embedder: Arc<dyn EmbeddingProvider>) -> Self {
		Self { cfg, db, embedder }
	}
}
