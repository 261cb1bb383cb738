use tracing::warn;

use crate::{Result, SearchService};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SourcesResponse {
	pub sources: Vec<String>,
}

impl SearchService {
	/// Known marketplace (ЭТП) labels for populating filter choices.
	/// Lookup failures degrade to an empty list with a warning log.
	pub async fn sources(&self) -> Result<SourcesResponse> {
		let sources = match lots_storage::procurements::distinct_etps(&self.db.pool).await {
			Ok(sources) => sources,
			Err(err) => {
				warn!(error = %err, "Failed to list distinct ETPs.");

				Vec::new()
			},
		};

		Ok(SourcesResponse { sources })
	}
}
