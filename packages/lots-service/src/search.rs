use lots_domain::{clean_label, normalize_query, order_participants};
use lots_storage::{
	models::LotRecord,
	procurements::{self, SearchParams},
};
use time::Date;
use tracing::warn;

use crate::{Error, Result, SearchService};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub query: String,
	/// Result cap. Defaults to `search.match_count`.
	pub limit: Option<u32>,
	/// Allowed marketplace labels. `None` means no source restriction;
	/// an explicitly empty set is rejected.
	pub etp_filter: Option<Vec<String>>,
	/// Minimum similarity score in `[0, 1]`. Defaults to
	/// `search.similarity_threshold`.
	pub similarity_threshold: Option<f32>,
	/// Size of the approximate-search pool handed to the store before exact
	/// re-ranking. A recall/latency trade-off: interactive callers keep it
	/// small, batch callers raise it. Defaults to `search.candidate_count`
	/// and is never allowed below the resolved limit.
	pub candidate_count: Option<u32>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchItem {
	pub similarity_score: f64,
	pub best_chunk_text: Option<String>,
	pub etp: Option<String>,
	#[serde(default, with = "lots_storage::date_serde::option")]
	pub publish_date: Option<Date>,
	pub customer: Option<String>,
	pub quantity: Option<f64>,
	pub price_per_unit: Option<f64>,
	pub unit_of_measurement: Option<String>,
	pub price: Option<f64>,
	pub winner: Option<String>,
	/// Winner first when known, then remaining participants in slot order.
	pub participants: Vec<String>,
	pub description: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub items: Vec<SearchItem>,
}

impl SearchService {
	/// The query pipeline: normalize, embed, remote similarity call, shape.
	/// Invalid input is rejected before any embedding or network work.
	/// No retries; a failed store call degrades to an empty result set, and
	/// the warning log is the only place the failure is visible.
	pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let normalized = normalize_query(&req.query);

		if normalized.is_empty() {
			return Err(Error::InvalidRequest {
				message: "Query must contain at least one letter or digit.".to_string(),
			});
		}
		if let Some(filter) = req.etp_filter.as_ref()
			&& filter.is_empty()
		{
			return Err(Error::InvalidRequest {
				message: "At least one ETP must be selected when filtering by source."
					.to_string(),
			});
		}

		let threshold = req.similarity_threshold.unwrap_or(self.cfg.search.similarity_threshold);

		if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
			return Err(Error::InvalidRequest {
				message: "similarity_threshold must be in the range 0.0-1.0.".to_string(),
			});
		}

		let match_count = req.limit.unwrap_or(self.cfg.search.match_count).max(1);
		let candidate_count =
			req.candidate_count.unwrap_or(self.cfg.search.candidate_count).max(match_count);
		let embedding = self.embed_query(&normalized).await?;
		let params = SearchParams {
			embedding: &embedding,
			similarity_threshold: threshold,
			match_count,
			etp_filter: req.etp_filter.as_deref(),
			initial_candidate_count: candidate_count,
		};
		let rows = match procurements::search_similar(&self.db.pool, params).await {
			Ok(rows) => rows,
			Err(err) => {
				warn!(
					error = %err,
					query = %normalized,
					"Similarity search failed; returning no results."
				);

				Vec::new()
			},
		};

		Ok(SearchResponse { items: rows.into_iter().map(shape_record).collect() })
	}

	async fn embed_query(&self, normalized: &str) -> Result<Vec<f32>> {
		let embeddings =
			self.embedder.embed(std::slice::from_ref(&normalized.to_string())).await?;
		let embedding = embeddings.into_iter().next().ok_or_else(|| Error::Embedding {
			message: "Embedding model returned no vectors.".to_string(),
		})?;

		if embedding.len() != self.cfg.embedding.dimensions as usize {
			return Err(Error::Embedding {
				message: "Embedding vector dimension mismatch.".to_string(),
			});
		}

		Ok(embedding)
	}
}

fn shape_record(record: LotRecord) -> SearchItem {
	let participants = order_participants(record.winner.as_deref(), &record.participant_slots());
	let winner = clean_label(record.winner.as_deref()).map(str::to_string);

	SearchItem {
		similarity_score: record.similarity_score,
		best_chunk_text: record.best_chunk_text,
		etp: record.etp,
		publish_date: record.publish_date,
		customer: record.customer,
		quantity: record.quantity,
		price_per_unit: record.price_per_unit,
		unit_of_measurement: record.unit_of_measurement,
		price: record.price,
		winner,
		participants,
		description: record.description,
	}
}
