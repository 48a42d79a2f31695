//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or mapping it onto the schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An environment override could not be converted to the field's type.
	#[error("invalid value {value:?} for {var}: expected {expected}")]
	InvalidEnv {
		var: String,
		value: String,
		expected: &'static str,
	},

	/// The `[log]` section names an unknown level.
	#[error(transparent)]
	Log(#[from] clau_log::LogError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
