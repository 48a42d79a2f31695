use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{LabelDefaults, NavigationError};

/// Node field compared against a path segment when looking for an existing sibling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKey {
	/// Compare node titles. Leaves are identified by the page title.
	#[default]
	Title,
	/// Compare node ids. Leaves are identified by the surface label id.
	Id,
}

impl FromStr for MatchKey {
	type Err = NavigationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"title" => Ok(Self::Title),
			"id" => Ok(Self::Id),
			_ => Err(NavigationError::UnknownMatchKey(s.to_owned())),
		}
	}
}

/// Tunables for page registration, selection and grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePolicy {
	pub defaults: LabelDefaults,
	pub match_key: MatchKey,
	/// Page ids never shown on any surface.
	pub excluded_ids: Vec<String>,
	/// Whether route parameters (`:slug`) open their own grouping node. Skipped when false.
	pub group_params: bool,
}

impl TreePolicy {
	/// Id of the home page, excluded from every surface.
	pub const HOME_ID: &'static str = "index";

	pub fn is_excluded(&self, id: &str) -> bool {
		self.excluded_ids.iter().any(|excluded| excluded == id)
	}
}

impl Default for TreePolicy {
	fn default() -> Self {
		Self {
			defaults: LabelDefaults::default(),
			match_key: MatchKey::default(),
			excluded_ids: vec![Self::HOME_ID.to_owned()],
			group_params: true,
		}
	}
}
