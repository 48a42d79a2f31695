//! Application configuration for Clau.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file, `clau.toml` by default
//! 3. `CLAU_*` environment variables (see [`env`])
//!
//! ```toml
//! [runtime]
//! api_base = "https://api.example.com"
//!
//! [runtime.public]
//! base_bucket = "https://cdn.example.com/site"
//!
//! [app]
//! title = "Docs"
//!
//! [log]
//! level = "info"
//! prefix = "DOCS"
//!
//! [navigation]
//! default_show = false
//! match_key = "title"
//! excluded_ids = ["index"]
//! group_params = true
//! ```
//!
//! [`AppConfig::flatten`] merges runtime, public and app settings into one table with the
//! derived [`Brand`] under `brand`.

mod brand;
pub mod env;
pub mod error;

use std::path::Path;
use std::str::FromStr;

use clau_log::{LogLevel, Logger};
use clau_navigation::{LabelDefaults, MatchKey, TreePolicy};
use serde::Deserialize;
use toml::{Table, Value};

pub use brand::Brand;
pub use env::{ENV_PREFIX, apply_env};
pub use error::{ConfigError, Result};

/// Config file looked up when no explicit path is given.
pub const DEFAULT_FILE: &str = "clau.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	pub runtime: RuntimeConfig,
	/// Free-form application settings.
	pub app: Table,
	pub log: LogConfig,
	pub navigation: NavigationConfig,
}

/// Server-side settings; `public` holds the part exposed to clients.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuntimeConfig {
	#[serde(default)]
	pub public: PublicConfig,
	#[serde(flatten)]
	pub extra: Table,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublicConfig {
	pub base_bucket: Option<String>,
	#[serde(flatten)]
	pub extra: Table,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
	pub level: Option<String>,
	pub prefix: Option<String>,
}

impl LogConfig {
	/// Builds a logger, falling back to [`Logger::default`] for unset fields.
	pub fn logger(&self) -> Result<Logger> {
		let logger = Logger::default();
		if let Some(level) = &self.level {
			logger.set_level(LogLevel::from_str(level)?);
		}
		if let Some(prefix) = &self.prefix {
			logger.set_prefix(prefix.as_str());
		}
		Ok(logger)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
	/// Visibility of labels that do not set `show`.
	pub default_show: bool,
	/// Sort index of labels that do not set `index`.
	pub default_index: i64,
	pub match_key: MatchKey,
	pub excluded_ids: Vec<String>,
	pub group_params: bool,
}

impl NavigationConfig {
	pub fn policy(&self) -> TreePolicy {
		TreePolicy {
			defaults: LabelDefaults {
				show: self.default_show,
				index: self.default_index,
			},
			match_key: self.match_key,
			excluded_ids: self.excluded_ids.clone(),
			group_params: self.group_params,
		}
	}
}

impl Default for NavigationConfig {
	fn default() -> Self {
		let policy = TreePolicy::default();
		Self {
			default_show: policy.defaults.show,
			default_index: policy.defaults.index,
			match_key: policy.match_key,
			excluded_ids: policy.excluded_ids,
			group_params: policy.group_params,
		}
	}
}

impl AppConfig {
	/// Parses a TOML string without environment overrides.
	pub fn parse(input: &str) -> Result<Self> {
		let table: Table = toml::from_str(input)?;
		Self::from_table(table)
	}

	pub fn from_table(table: Table) -> Result<Self> {
		Ok(Value::Table(table).try_into()?)
	}

	/// Loads `path` (or [`DEFAULT_FILE`]) and applies the process environment.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		Self::load_layered(path, std::env::vars())
	}

	/// Layers defaults, the config file and `vars`.
	///
	/// A missing file contributes nothing. An unreadable or malformed one is an error.
	pub fn load_layered<I, K, V>(path: Option<&Path>, vars: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let path = path.unwrap_or(Path::new(DEFAULT_FILE));
		let mut table = match std::fs::read_to_string(path) {
			Ok(content) => toml::from_str::<Table>(&content)?,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "config file not found, using defaults");
				Table::new()
			}
			Err(error) => {
				return Err(ConfigError::Io {
					path: path.to_path_buf(),
					error,
				});
			}
		};
		apply_env(&mut table, vars)?;
		let config = Self::from_table(table)?;
		tracing::debug!(
			path = %path.display(),
			base_bucket = ?config.runtime.public.base_bucket,
			"config loaded"
		);
		Ok(config)
	}

	pub fn brand(&self) -> Brand {
		Brand::from_bucket(self.runtime.public.base_bucket.as_deref())
	}

	/// Single-level view of runtime, public and app settings plus `brand`.
	///
	/// Later sources override earlier keys: runtime, then public, then app.
	pub fn flatten(&self) -> Table {
		let mut out = self.runtime.extra.clone();
		if let Some(bucket) = &self.runtime.public.base_bucket {
			out.insert("base_bucket".into(), Value::String(bucket.clone()));
		}
		out.extend(self.runtime.public.extra.clone());
		out.extend(self.app.clone());
		out.insert("brand".into(), Value::Table(self.brand().to_table()));
		out
	}
}
