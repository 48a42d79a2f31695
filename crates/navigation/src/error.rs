use thiserror::Error;

use crate::Surface;

/// Precondition violations raised while turning route descriptors into pages.
#[derive(Debug, Error)]
pub enum NavigationError {
	/// The descriptor carries no path to split into segments.
	#[error("route is required (route name: {name:?})")]
	MissingRoute { name: Option<String> },

	/// The descriptor has no name to use as the page id.
	#[error("route name is required for path {path:?}")]
	MissingId { path: String },

	/// Surface metadata is not an object with the label shape.
	#[error("invalid {surface} metadata for page {id:?}: {source}")]
	InvalidLabel {
		id: String,
		surface: Surface,
		source: serde_json::Error,
	},

	/// A scalar meta field has the wrong type.
	#[error("meta field {key:?} of page {id:?} must be a string")]
	InvalidField { id: String, key: &'static str },

	#[error("unknown surface {0:?} (expected navbar, sidebar or footer)")]
	UnknownSurface(String),

	#[error("unknown match key {0:?} (expected title or id)")]
	UnknownMatchKey(String),

	#[error("failed to parse route manifest: {0}")]
	Manifest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NavigationError>;
