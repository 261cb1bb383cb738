pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Embedding error: {message}")]
	Embedding { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<lots_providers::Error> for Error {
	fn from(err: lots_providers::Error) -> Self {
		Self::Embedding { message: err.to_string() }
	}
}

impl From<lots_storage::Error> for Error {
	fn from(err: lots_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}
