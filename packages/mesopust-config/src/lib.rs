mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Search, Security, Service, Storage};

use std::{fs, path::Path};

/// Shortest query, in characters, that reaches the catalogue.
pub const MIN_QUERY_CHARS: u32 = 2;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_query_chars < MIN_QUERY_CHARS {
		return Err(Error::Validation {
			message: format!("search.max_query_chars must be at least {MIN_QUERY_CHARS}."),
		});
	}
	if cfg.search.max_rows_per_table == 0 {
		return Err(Error::Validation {
			message: "search.max_rows_per_table must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let trimmed = cfg.service.log_level.trim();

	cfg.service.log_level =
		if trimmed.is_empty() { types::default_log_level() } else { trimmed.to_string() };
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
}
