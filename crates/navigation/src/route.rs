//! Route descriptors supplied by the host router.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Result;

/// One route as reported by the host router. Never mutated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
	/// Route name, used as the page id.
	#[serde(default)]
	pub name: Option<String>,
	/// Slash-delimited path.
	#[serde(default)]
	pub path: Option<String>,
	/// Free-form route metadata; navigation keys are read from here.
	#[serde(default)]
	pub meta: Map<String, Value>,
}

impl RouteDescriptor {
	pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			path: Some(path.into()),
			meta: Map::new(),
		}
	}

	pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
		self.meta = meta;
		self
	}
}

/// Snapshot provider for the current route set.
pub trait RouteSource {
	fn routes(&self) -> Vec<RouteDescriptor>;
}

impl RouteSource for [RouteDescriptor] {
	fn routes(&self) -> Vec<RouteDescriptor> {
		self.to_vec()
	}
}

impl RouteSource for Vec<RouteDescriptor> {
	fn routes(&self) -> Vec<RouteDescriptor> {
		self.clone()
	}
}

/// Route list loaded from a JSON array of descriptors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteManifest {
	routes: Vec<RouteDescriptor>,
}

impl RouteManifest {
	pub fn from_json(json: &str) -> Result<Self> {
		let routes = serde_json::from_str(json)?;
		Ok(Self { routes })
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

impl RouteSource for RouteManifest {
	fn routes(&self) -> Vec<RouteDescriptor> {
		self.routes.clone()
	}
}
