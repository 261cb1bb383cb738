use serde::{Deserialize, Serialize};
use time::Date;

/// One historical procurement lot as returned by the store's similarity
/// function, carrying the score of its best-matching description chunk.
/// Rows are created and owned by the external dataset; this crate only
/// reads them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LotRecord {
	pub similarity_score: f64,
	pub best_chunk_text: Option<String>,
	pub etp: Option<String>,
	#[serde(default, with = "crate::date_serde::option")]
	pub publish_date: Option<Date>,
	pub customer: Option<String>,
	pub quantity: Option<f64>,
	pub price_per_unit: Option<f64>,
	pub unit_of_measurement: Option<String>,
	pub price: Option<f64>,
	pub winner: Option<String>,
	pub participant_1: Option<String>,
	pub participant_2: Option<String>,
	pub participant_3: Option<String>,
	pub participant_4: Option<String>,
	pub participant_5: Option<String>,
	pub participant_6: Option<String>,
	pub participant_7: Option<String>,
	pub participant_8: Option<String>,
	pub participant_9: Option<String>,
	pub participant_10: Option<String>,
	pub description: Option<String>,
}
impl LotRecord {
	/// The participant slots in their recorded order.
	pub fn participant_slots(&self) -> [Option<&str>; 10] {
		[
			self.participant_1.as_deref(),
			self.participant_2.as_deref(),
			self.participant_3.as_deref(),
			self.participant_4.as_deref(),
			self.participant_5.as_deref(),
			self.participant_6.as_deref(),
			self.participant_7.as_deref(),
			self.participant_8.as_deref(),
			self.participant_9.as_deref(),
			self.participant_10.as_deref(),
		]
	}
}
