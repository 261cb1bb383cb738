use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub embedding: Embedding,
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Embedding {
	/// Identifier of the pretrained sentence-embedding model. Fixed per
	/// deployment; queries never select a model.
	pub model: String,
	pub dimensions: u32,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	pub similarity_threshold: f32,
	pub match_count: u32,
	pub candidate_count: u32,
}
