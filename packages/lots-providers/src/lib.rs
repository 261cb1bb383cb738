pub mod embedding;

mod error;

pub use embedding::{LocalEmbedder, l2_normalize, resolve_model};
pub use error::{Error, Result};
