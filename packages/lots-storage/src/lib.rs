pub mod date_serde;
pub mod db;
pub mod models;
pub mod procurements;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
