/// Remote procedures and tables owned by the managed store. The parameter
/// order of the search function is a published contract; see `SearchParams`.
pub const SEARCH_FUNCTION: &str = "search_procurements_v2";
pub const DISTINCT_ETP_FUNCTION: &str = "get_distinct_etps_final";
pub const DATA_TABLE: &str = "procurement_data_final";

use sqlx::PgPool;
use tracing::warn;

use crate::{Result, models::LotRecord};

/// Inputs of one similarity-search call, in the remote function's parameter
/// order: embedding, similarity threshold, match count, source filter,
/// initial candidate count.
#[derive(Debug)]
pub struct SearchParams<'a> {
	pub embedding: &'a [f32],
	pub similarity_threshold: f32,
	pub match_count: u32,
	pub etp_filter: Option<&'a [String]>,
	pub initial_candidate_count: u32,
}

/// Runs the store's two-phase similarity search. The remote function does
/// an approximate scan over chunk embeddings bounded by
/// `initial_candidate_count`, then filters, keeps the best chunk per lot,
/// orders by descending score, and truncates to `match_count`.
pub async fn search_similar(pool: &PgPool, params: SearchParams<'_>) -> Result<Vec<LotRecord>> {
	let embedding_text = vector_to_pg(params.embedding);
	let rows = sqlx::query_as::<_, LotRecord>(
		"\
SELECT
	similarity_score,
	best_chunk_text,
	etp,
	publish_date,
	customer,
	quantity,
	price_per_unit,
	unit_of_measurement,
	price,
	winner,
	participant_1,
	participant_2,
	participant_3,
	participant_4,
	participant_5,
	participant_6,
	participant_7,
	participant_8,
	participant_9,
	participant_10,
	description
FROM search_procurements_v2($1::text::vector, $2, $3, $4, $5)",
	)
	.bind(embedding_text.as_str())
	.bind(params.similarity_threshold as f64)
	.bind(params.match_count as i32)
	.bind(params.etp_filter)
	.bind(params.initial_candidate_count as i32)
	.fetch_all(pool)
	.await?;

	Ok(rows)
}

/// The set of known marketplace (ЭТП) labels, for populating filter choices.
/// Prefers the store's function; falls back to a direct distinct scan when
/// the function is missing or fails.
pub async fn distinct_etps(pool: &PgPool) -> Result<Vec<String>> {
	let via_function = sqlx::query_scalar::<_, Option<String>>(
		"SELECT etp FROM get_distinct_etps_final()",
	)
	.fetch_all(pool)
	.await;

	match via_function {
		Ok(rows) => Ok(rows.into_iter().flatten().filter(|etp| !etp.is_empty()).collect()),
		Err(err) => {
			warn!(error = %err, "Distinct ETP function failed; falling back to a table scan.");

			let rows = sqlx::query_scalar::<_, String>(
				"\
SELECT DISTINCT etp
FROM procurement_data_final
WHERE etp IS NOT NULL
ORDER BY etp",
			)
			.fetch_all(pool)
			.await?;

			Ok(rows)
		},
	}
}

/// Renders an embedding as the bracketed literal the store's `vector` type
/// parses, matching what the indexing side stored.
pub fn vector_to_pg(vec: &[f32]) -> String {
	let mut out = String::with_capacity(vec.len() * 8);

	out.push('[');

	for (i, value) in vec.iter().enumerate() {
		if i > 0 {
			out.push(',');
		}

		out.push_str(&value.to_string());
	}

	out.push(']');

	out
}
