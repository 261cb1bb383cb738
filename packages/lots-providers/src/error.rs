pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Unknown embedding model {model:?}.")]
	UnknownModel { model: String },
	#[error("Failed to load embedding model {model:?}: {message}")]
	ModelLoad { model: String, message: String },
	#[error("Embedding inference failed: {message}")]
	Inference { message: String },
	#[error("Embedding dimension mismatch for model {model:?}: expected {expected}, got {actual}.")]
	DimensionMismatch { model: String, expected: u32, actual: u32 },
}
