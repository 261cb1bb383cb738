use std::sync::{Arc, Mutex};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::{Error, Result};

/// Process-wide sentence-embedding model.
///
/// Loading maps the ONNX weights into memory, so one instance is created at
/// startup and shared for the life of the process. `TextEmbedding::embed`
/// takes `&mut self`; the mutex serializes inference across callers.
pub struct LocalEmbedder {
	model: Arc<Mutex<TextEmbedding>>,
	model_id: String,
	dimensions: u32,
}
impl LocalEmbedder {
	pub fn load(cfg: &lots_config::Embedding) -> Result<Self> {
		let (model, dimensions) = resolve_model(&cfg.model)?;

		if cfg.dimensions != dimensions {
			return Err(Error::DimensionMismatch {
				model: cfg.model.clone(),
				expected: dimensions,
				actual: cfg.dimensions,
			});
		}

		let loaded =
			TextEmbedding::try_new(InitOptions::new(model).with_show_download_progress(false))
				.map_err(|err| Error::ModelLoad {
					model: cfg.model.clone(),
					message: err.to_string(),
				})?;

		tracing::info!(model = %cfg.model, dimensions, "Embedding model loaded.");

		Ok(Self {
			model: Arc::new(Mutex::new(loaded)),
			model_id: cfg.model.clone(),
			dimensions,
		})
	}

	pub fn model_id(&self) -> &str {
		&self.model_id
	}

	pub fn dimensions(&self) -> u32 {
		self.dimensions
	}

	/// Embeds a batch of normalized texts into unit-length vectors.
	/// Inference runs on a blocking thread so the async caller is not pinned
	/// to the model's compute time.
	pub async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
		if texts.is_empty() {
			return Ok(Vec::new());
		}

		let model = Arc::clone(&self.model);
		let batch = texts.to_vec();
		let mut vectors = tokio::task::spawn_blocking(move || {
			let mut model = model.lock().unwrap_or_else(|err| err.into_inner());

			model.embed(batch, None)
		})
		.await
		.map_err(|err| Error::Inference { message: err.to_string() })?
		.map_err(|err| Error::Inference { message: err.to_string() })?;

		for vector in &mut vectors {
			if vector.len() != self.dimensions as usize {
				return Err(Error::DimensionMismatch {
					model: self.model_id.clone(),
					expected: self.dimensions,
					actual: vector.len() as u32,
				});
			}

			l2_normalize(vector);
		}

		Ok(vectors)
	}
}

/// Maps a configured model id onto the supported multilingual sentence
/// models and their native output dimension.
pub fn resolve_model(model_id: &str) -> Result<(EmbeddingModel, u32)> {
	match model_id {
		"multilingual-e5-small" => Ok((EmbeddingModel::MultilingualE5Small, 384)),
		"multilingual-e5-base" => Ok((EmbeddingModel::MultilingualE5Base, 768)),
		"multilingual-e5-large" => Ok((EmbeddingModel::MultilingualE5Large, 1_024)),
		"paraphrase-multilingual-minilm-l12-v2" =>
			Ok((EmbeddingModel::ParaphraseMLMiniLML12V2, 384)),
		"paraphrase-multilingual-mpnet-base-v2" =>
			Ok((EmbeddingModel::ParaphraseMLMpnetBaseV2, 768)),
		_ => Err(Error::UnknownModel { model: model_id.to_string() }),
	}
}

pub fn l2_normalize(vector: &mut [f32]) {
	let norm = vector.iter().map(|value| value * value).sum::<f32>().sqrt();

	if norm > f32::EPSILON {
		for value in vector.iter_mut() {
			*value /= norm;
		}
	}
}
