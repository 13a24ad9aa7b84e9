use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Search {
	/// Queries longer than this many characters are dropped before any table is queried.
	#[serde(default = "default_max_query_chars")]
	pub max_query_chars: u32,
	/// Upper bound on rows fetched from a single table per search.
	#[serde(default = "default_max_rows_per_table")]
	pub max_rows_per_table: u32,
}
impl Default for Search {
	fn default() -> Self {
		Self {
			max_query_chars: default_max_query_chars(),
			max_rows_per_table: default_max_rows_per_table(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
	#[serde(default = "default_bind_localhost_only")]
	pub bind_localhost_only: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: default_bind_localhost_only() }
	}
}

pub(crate) fn default_log_level() -> String {
	"info".to_string()
}

fn default_max_query_chars() -> u32 {
	256
}

fn default_max_rows_per_table() -> u32 {
	200
}

fn default_bind_localhost_only() -> bool {
	true
}
