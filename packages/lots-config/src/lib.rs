mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Embedding, Postgres, Search, Service, Storage};

use std::{env, fs, path::Path, str::FromStr};

pub const DEFAULT_MODEL: &str = "multilingual-e5-large";

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

/// Builds the configuration from process environment variables, the way the
/// service is deployed when no config file is given. `LOTS_DB_DSN` is
/// required; everything else has a default.
pub fn from_env() -> Result<Config> {
	let dsn = env_string("LOTS_DB_DSN").ok_or(Error::MissingEnv { name: "LOTS_DB_DSN" })?;
	let mut cfg = Config {
		service: Service {
			http_bind: env_string("LOTS_HTTP_BIND")
				.unwrap_or_else(|| "127.0.0.1:8080".to_string()),
			log_level: env_string("LOTS_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
		},
		storage: Storage {
			postgres: Postgres { dsn, pool_max_conns: parse_env("LOTS_DB_POOL_MAX_CONNS", 5)? },
		},
		embedding: Embedding {
			model: env_string("LOTS_EMBED_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
			dimensions: parse_env("LOTS_EMBED_DIMENSIONS", 1_024)?,
		},
		search: Search {
			similarity_threshold: parse_env("LOTS_SIMILARITY_THRESHOLD", 0.3)?,
			match_count: parse_env("LOTS_MATCH_COUNT", 10)?,
			candidate_count: parse_env("LOTS_CANDIDATE_COUNT", 10_000)?,
		},
	};

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.embedding.model.is_empty() {
		return Err(Error::Validation {
			message: "embedding.model must be non-empty.".to_string(),
		});
	}
	if cfg.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if !cfg.search.similarity_threshold.is_finite()
		|| !(0.0..=1.0).contains(&cfg.search.similarity_threshold)
	{
		return Err(Error::Validation {
			message: "search.similarity_threshold must be in the range 0.0-1.0.".to_string(),
		});
	}
	if cfg.search.match_count == 0 {
		return Err(Error::Validation {
			message: "search.match_count must be greater than zero.".to_string(),
		});
	}
	if cfg.search.candidate_count < cfg.search.match_count {
		return Err(Error::Validation {
			message: "search.candidate_count must be at least search.match_count.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	for field in [
		&mut cfg.service.http_bind,
		&mut cfg.service.log_level,
		&mut cfg.storage.postgres.dsn,
		&mut cfg.embedding.model,
	] {
		*field = field.trim().to_string();
	}
}

fn env_string(name: &str) -> Option<String> {
	env::var(name).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn parse_env<T: FromStr>(name: &'static str, default: T) -> Result<T> {
	match env_string(name) {
		Some(raw) => raw.parse().map_err(|_| Error::InvalidEnv { name, value: raw }),
		None => Ok(default),
	}
}
